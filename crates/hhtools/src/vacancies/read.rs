use crate::prelude::{println, *};
use colored::Colorize;
use hhtools_core::vacancy::{strip_html, Card, CardView, NOT_SELECTED};

use super::{extract_vacancy_id, fetch_vacancy};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadOptions {
    /// Vacancy ID or full URL (e.g., "45440028" or "https://hh.ru/vacancy/45440028")
    #[clap(env = "HH_VACANCY")]
    pub vacancy: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    let vacancy_id = extract_vacancy_id(&options.vacancy)?;

    if global.verbose {
        println!("Fetching vacancy ID: {}", vacancy_id);
    }

    let view = read_vacancy_data(&vacancy_id).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_vacancy_text(&view));
    }

    Ok(())
}

/// Fetch one vacancy and return its rendering view.
pub async fn read_vacancy_data(vacancy_id: &str) -> Result<CardView> {
    let client = reqwest::Client::new();
    let payload = fetch_vacancy(&client, vacancy_id).await?;

    Ok(Card::from_payload(payload).view())
}

/// Convert a vacancy view to formatted text with colors
fn format_vacancy_text(view: &CardView) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", view.title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(logo) = &view.logo {
        result.push_str(&format!("\n{}: {}\n", "Logo".green(), logo.cyan()));
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Form", view.form]);
    table.add_row(prettytable::row!["Company", view.company]);
    table.add_row(prettytable::row!["Web", view.web]);
    table.add_row(prettytable::row!["Address", view.address]);
    result.push_str(&format!("\n{table}"));

    result.push_str(&format!("\n{}\n", "DESCRIPTION".bright_yellow().bold()));
    if view.description == NOT_SELECTED {
        result.push_str(&format!("{}\n", NOT_SELECTED.yellow()));
    } else {
        result.push_str(&format!("{}\n", strip_html(&view.description)));
    }

    result.push_str(&format!(
        "\n{}: {}\n\n",
        "ID".green(),
        view.id.bright_white()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_view() -> CardView {
        CardView {
            id: "45440028".to_string(),
            title: "Rust Engineer".to_string(),
            logo: None,
            form: "Full time".to_string(),
            company: "Acme".to_string(),
            web: "https://hh.ru/employer/42".to_string(),
            address: "Moscow".to_string(),
            description: "<p>Build <strong>backend</strong> services</p>".to_string(),
        }
    }

    #[test]
    fn test_format_vacancy_text_basic() {
        let formatted = format_vacancy_text(&test_view());

        assert!(formatted.contains("Rust Engineer"));
        assert!(formatted.contains("Full time"));
        assert!(formatted.contains("Acme"));
        assert!(formatted.contains("Moscow"));
        assert!(formatted.contains("45440028"));
    }

    #[test]
    fn test_format_vacancy_text_strips_description_html() {
        let formatted = format_vacancy_text(&test_view());

        assert!(formatted.contains("Build backend services"));
        assert!(!formatted.contains("<strong>"));
    }

    #[test]
    fn test_format_vacancy_text_hides_missing_logo() {
        let formatted = format_vacancy_text(&test_view());

        assert!(!formatted.contains("Logo"));
    }

    #[test]
    fn test_format_vacancy_text_shows_logo() {
        let mut view = test_view();
        view.logo = Some("https://img.example/acme.png".to_string());

        let formatted = format_vacancy_text(&view);

        assert!(formatted.contains("Logo"));
        assert!(formatted.contains("https://img.example/acme.png"));
    }

    #[test]
    fn test_format_vacancy_text_missing_description() {
        let mut view = test_view();
        view.description = NOT_SELECTED.to_string();

        let formatted = format_vacancy_text(&view);

        assert!(formatted.contains("Not Selected"));
    }
}
