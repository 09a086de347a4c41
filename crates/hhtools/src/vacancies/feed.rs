use crate::prelude::{println, *};
use colored::Colorize;
use hhtools_core::feed::{assemble_feed, Feed, PageStats, DEFAULT_MAX_RECORDS, DEFAULT_PER_PAGE};

use super::{fetch_page, hydrate_page, list::format_card_block, FilterArgs};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FeedOptions {
    /// Number of vacancies per page load
    #[arg(short = 'n', long, env = "HH_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Maximum number of vacancies loadable in one session
    #[arg(long, env = "HH_MAX_RECORDS", default_value_t = DEFAULT_MAX_RECORDS)]
    pub max_records: usize,

    /// Number of successive page loads
    #[arg(long, default_value = "1")]
    pub pages: usize,

    #[clap(flatten)]
    pub filters: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: FeedOptions, global: crate::Global) -> Result<()> {
    let filters = options.filters.to_filter_set();
    let mut feed = Feed::with_limits(options.per_page, options.max_records);

    // A filtered session starts from scratch: cursor to 1, then drop the
    // collection before any refetch.
    if !filters.is_empty() {
        feed.reset_page();
        feed.clear_cards();
    }

    let client = reqwest::Client::new();
    let mut pages: Vec<PageStats> = Vec::new();
    let mut exhausted = false;

    for _ in 0..options.pages {
        // Bound check comes before the fetch; past the bound nothing is
        // issued and the session ends.
        if !feed.can_load() {
            exhausted = true;
            break;
        }

        let page_index = feed.page();
        if global.verbose {
            println!("Loading page {}...", page_index);
        }

        let listing = fetch_page(&client, feed.per_page(), page_index, &filters).await?;
        let (cards, failed) = hydrate_page(&client, &listing).await;

        let stats = PageStats {
            requested: feed.per_page(),
            listed: listing.items.len(),
            hydrated: cards.len(),
            failed,
        };

        if !options.json {
            let offset = feed.cards().len();
            for (idx, card) in cards.iter().enumerate() {
                print!("{}", format_card_block(&card.view(), offset + idx + 1));
            }
            print!("{}", format_page_summary(&stats, page_index));
        }

        feed.append_cards(cards);
        feed.advance_page();
        pages.push(stats);

        if stats.exhausted() {
            exhausted = true;
            break;
        }
    }

    if options.json {
        let output = assemble_feed(feed.cards(), pages, exhausted);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_feed_footer(feed.cards().len(), exhausted));
    }

    Ok(())
}

fn format_page_summary(stats: &PageStats, page: usize) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {} listed, {} hydrated, {} failed\n",
        format!("Page {page}:").bright_white().bold(),
        stats.listed.to_string().bright_cyan(),
        stats.hydrated.to_string().bright_cyan(),
        stats.failed.to_string().bright_magenta()
    ));

    result
}

fn format_feed_footer(total: usize, exhausted: bool) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!(
        "{} {}\n",
        total.to_string().bright_cyan().bold(),
        "vacancies loaded".bright_white()
    ));

    if exhausted {
        result.push_str(&format!("\n{}\n", "No more vacancies available.".yellow()));
    } else {
        result.push_str(&format!(
            "\n{}:\n  {}\n",
            "To load more in one session".bright_white().bold(),
            "hhtools vacancies feed --pages <count>".cyan()
        ));
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_page_summary_counts() {
        let stats = PageStats {
            requested: 5,
            listed: 5,
            hydrated: 4,
            failed: 1,
        };

        let summary = format_page_summary(&stats, 2);

        assert!(summary.contains("Page 2:"));
        assert!(summary.contains("5"));
        assert!(summary.contains("4"));
        assert!(summary.contains("failed"));
    }

    #[test]
    fn test_format_feed_footer_exhausted() {
        let footer = format_feed_footer(12, true);

        assert!(footer.contains("12"));
        assert!(footer.contains("vacancies loaded"));
        assert!(footer.contains("No more vacancies available."));
        assert!(!footer.contains("To load more"));
    }

    #[test]
    fn test_format_feed_footer_more_available() {
        let footer = format_feed_footer(5, false);

        assert!(footer.contains("To load more in one session"));
        assert!(footer.contains("hhtools vacancies feed --pages"));
        assert!(!footer.contains("No more vacancies available."));
    }
}
