use crate::prelude::{println, *};
use colored::Colorize;
use hhtools_core::feed::{assemble_page, PageOutput, PageStats};
use hhtools_core::filters::FilterSet;
use hhtools_core::vacancy::CardView;

use super::{fetch_page, hydrate_page, FilterArgs};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Number of vacancies per page
    #[arg(short = 'n', long, env = "HH_PER_PAGE", default_value = "5")]
    pub per_page: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    #[clap(flatten)]
    pub filters: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let filters = options.filters.to_filter_set();

    if global.verbose {
        println!(
            "Fetching vacancies page {} ({} per page)...",
            options.page, options.per_page
        );
    }

    let output = list_vacancies_data(options.per_page, options.page, &filters).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_page_text(&output));
    }

    Ok(())
}

/// Fetch and hydrate one page of vacancies.
pub async fn list_vacancies_data(
    per_page: usize,
    page: usize,
    filters: &FilterSet,
) -> Result<PageOutput> {
    let client = reqwest::Client::new();

    let listing = fetch_page(&client, per_page, page, filters).await?;
    let (cards, failed) = hydrate_page(&client, &listing).await;

    let stats = PageStats {
        requested: per_page,
        listed: listing.items.len(),
        hydrated: cards.len(),
        failed,
    };

    Ok(assemble_page(&cards, stats, page, listing.found))
}

/// One rendered card fragment. Appended in listing order; the logo line is
/// dropped entirely when the card has no logo.
pub(crate) fn format_card_block(view: &CardView, number: usize) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {}\n",
        format!("[{number}]").yellow().bold(),
        view.title.white().bold()
    ));

    if let Some(logo) = &view.logo {
        result.push_str(&format!("    {}: {}\n", "Logo".green(), logo.cyan()));
    }

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "Company".green(),
        view.company.bright_white(),
        "Form".green(),
        view.form.bright_white()
    ));

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "Address".green(),
        view.address.bright_white(),
        "Web".green(),
        view.web.cyan()
    ));

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "ID".green(),
        view.id.bright_white(),
        "Read".green(),
        format!("hhtools vacancies read {}", view.id).cyan()
    ));

    result
}

/// Convert a page output to formatted text with colors
fn format_page_text(output: &PageOutput) -> String {
    let mut result = String::new();
    let info = &output.pagination;

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("VACANCIES (Page {})", info.current_page)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.cards.is_empty() {
        result.push_str(&format!("\n{}\n", "No vacancies on this page.".yellow()));
    } else {
        for (idx, view) in output.cards.iter().enumerate() {
            let number = (info.current_page - 1) * info.per_page + idx + 1;
            result.push_str(&format_card_block(view, number));
        }
    }

    // Summary and navigation
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "{} {} listed, {} hydrated, {} failed",
        "Page summary:".bright_white().bold(),
        info.listed.to_string().bright_cyan(),
        info.hydrated.to_string().bright_cyan(),
        info.failed.to_string().bright_magenta()
    ));
    if let Some(found) = info.found {
        result.push_str(&format!(
            " ({} {} total)",
            found.to_string().bright_cyan(),
            "matching".bright_white()
        ));
    }
    result.push('\n');

    if info.exhausted {
        result.push_str(&format!("\n{}\n", "No more pages available.".yellow()));
    }
    if let Some(next) = &info.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &info.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push_str(&format!(
        "\n{}:\n  {}\n",
        "To read a vacancy".bright_white().bold(),
        "hhtools vacancies read <id>".cyan()
    ));

    result.push('\n');
    result
}
