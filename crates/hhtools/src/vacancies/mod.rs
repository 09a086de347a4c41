use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use futures::future::join_all;
use hhtools_core::filters::FilterSet;
use hhtools_core::vacancy::{Card, VacanciesPage, VacancyPayload};
use regex::Regex;

pub mod feed;
pub mod list;
pub mod read;

const HH_API_BASE: &str = "https://api.hh.ru";

#[derive(Debug, clap::Parser)]
#[command(name = "vacancies")]
#[command(about = "Job vacancy operations against the HeadHunter API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of vacancies with optional filters
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Read a single vacancy with its full description
    #[clap(name = "read")]
    Read(read::ReadOptions),

    /// Incrementally load successive pages into one feed
    #[clap(name = "feed")]
    Feed(feed::FeedOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Vacancies API Base: {}", api_base());
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Read(options) => read::run(options, global).await,
        Commands::Feed(options) => feed::run(options, global).await,
    }
}

/// Base URL for the vacancies API, overridable for mirrors and tests.
pub fn api_base() -> String {
    std::env::var("HH_BASE_URL").unwrap_or_else(|_| HH_API_BASE.to_string())
}

/// Filter flags shared by the list and feed commands.
#[derive(Debug, Default, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FilterArgs {
    /// Full-text search over vacancy names
    #[arg(long)]
    pub text: Option<String>,

    /// Employment form (e.g. "full", "part", "probation")
    #[arg(long)]
    pub employment: Option<String>,

    /// Work schedule (e.g. "fullDay", "remote", "shift")
    #[arg(long)]
    pub schedule: Option<String>,

    /// Required experience (e.g. "noExperience", "between1And3")
    #[arg(long)]
    pub experience: Option<String>,

    /// Area identifier (e.g. "1" for Moscow)
    #[arg(long)]
    pub area: Option<String>,
}

impl FilterArgs {
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet {
            text: self.text.clone(),
            employment: self.employment.clone(),
            schedule: self.schedule.clone(),
            experience: self.experience.clone(),
            area: self.area.clone(),
        }
    }
}

pub fn extract_vacancy_id(input: &str) -> Result<String> {
    // Bare numeric ID first
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Ok(input.to_string());
    }

    // Then a vacancy URL, e.g. https://hh.ru/vacancy/45440028
    let re = Regex::new(r"vacancy/(\d+)").unwrap();
    if let Some(caps) = re.captures(input) {
        if let Some(id_match) = caps.get(1) {
            return Ok(id_match.as_str().to_string());
        }
    }

    Err(Error::InvalidVacancyRef(input.to_string()).into())
}

/// Fetch the full payload for one vacancy.
pub async fn fetch_vacancy(client: &reqwest::Client, id: &str) -> Result<VacancyPayload> {
    let url = format!("{}/vacancies/{}", api_base(), urlencoding::encode(id));
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch vacancy {id}: {e}")))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body }.into());
    }

    let payload: VacancyPayload = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse vacancy {}: {}", id, e))?;

    Ok(payload)
}

/// Fetch one page of vacancy stubs, with active filters as query parameters.
pub async fn fetch_page(
    client: &reqwest::Client,
    per_page: usize,
    page: usize,
    filters: &FilterSet,
) -> Result<VacanciesPage> {
    let url = format!("{}/vacancies", api_base());

    let mut query: Vec<(String, String)> = vec![
        ("per_page".to_string(), per_page.to_string()),
        ("page".to_string(), page.to_string()),
    ];
    query.extend(filters.to_query_pairs());

    let response = client
        .get(&url)
        .query(&query)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch vacancies page {page}: {e}")))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body }.into());
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse vacancies page {}: {}", page, e))
}

/// Hydrate a page of stubs into cards via per-item detail fetches.
///
/// Detail fetches run through `join_all`, which yields results in stub
/// order, so cards keep the listing order. A failed item is logged and
/// skipped; the page degrades to fewer cards. Returns the cards and the
/// failure count.
pub async fn hydrate_page(client: &reqwest::Client, page: &VacanciesPage) -> (Vec<Card>, usize) {
    let detail_futures = page.items.iter().map(|stub| fetch_vacancy(client, &stub.id));
    let results = join_all(detail_futures).await;

    let mut cards = Vec::with_capacity(page.items.len());
    let mut failed = 0;

    for (stub, result) in page.items.iter().zip(results) {
        match result {
            Ok(payload) => cards.push(Card::from_payload(payload)),
            Err(err) => {
                failed += 1;
                eprintln!("{} vacancy {}: {}", "Skipping".yellow(), stub.id, err);
            }
        }
    }

    (cards, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_vacancy_id_numeric() {
        assert_eq!(extract_vacancy_id("45440028").unwrap(), "45440028");
    }

    #[test]
    fn test_extract_vacancy_id_from_url() {
        assert_eq!(
            extract_vacancy_id("https://hh.ru/vacancy/45440028").unwrap(),
            "45440028"
        );
        assert_eq!(
            extract_vacancy_id("https://hh.ru/vacancy/45440028?from=main").unwrap(),
            "45440028"
        );
    }

    #[test]
    fn test_extract_vacancy_id_rejects_garbage() {
        assert!(extract_vacancy_id("not-a-vacancy").is_err());
        assert!(extract_vacancy_id("").is_err());
    }

    #[test]
    fn test_filter_args_map_to_filter_set() {
        let args = FilterArgs {
            employment: Some("full".to_string()),
            ..FilterArgs::default()
        };

        let filters = args.to_filter_set();
        assert_eq!(
            filters.to_query_pairs(),
            vec![("employment".to_string(), "full".to_string())]
        );
    }
}
