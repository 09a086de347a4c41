use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel shown for any display field the API did not provide.
pub const NOT_SELECTED: &str = "Not Selected";

/// Full vacancy payload from the detail endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VacancyPayload {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub employer: Option<Employer>,
    pub employment: Option<Employment>,
    pub area: Option<Area>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Employer {
    pub name: Option<String>,
    pub alternate_url: Option<String>,
    pub logo_urls: Option<LogoUrls>,
}

/// Employer logo references keyed by pixel size.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogoUrls {
    #[serde(rename = "240")]
    pub size_240: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Employment {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Area {
    pub name: Option<String>,
}

/// One page of the listing endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VacanciesPage {
    pub items: Vec<VacancyStub>,
    pub found: Option<u64>,
    pub pages: Option<u64>,
}

/// Abbreviated vacancy data from the listing endpoint. Descriptive fields
/// require a follow-up fetch of the full payload by id.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VacancyStub {
    pub id: String,
    pub name: Option<String>,
}

/// Working conditions displayed on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conditions {
    pub form: String,
    pub company: String,
    pub web: String,
    pub address: String,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            form: NOT_SELECTED.to_string(),
            company: NOT_SELECTED.to_string(),
            web: NOT_SELECTED.to_string(),
            address: NOT_SELECTED.to_string(),
        }
    }
}

/// Normalized display data for one vacancy.
///
/// Every field holds a defined value at all times: absent upstream strings
/// are replaced with [`NOT_SELECTED`] at construction, an absent logo with
/// the empty string. Only `description` and `logo_url` may be overwritten
/// afterwards, for later enrichment passes.
#[derive(Debug, Clone)]
pub struct Card {
    id: String,
    title: String,
    description: String,
    logo_url: String,
    conditions: Conditions,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        title: Option<String>,
        description: Option<String>,
        logo_url: Option<String>,
        conditions: Conditions,
    ) -> Self {
        Self {
            id: id.into(),
            title: or_not_selected(title),
            description: or_not_selected(description),
            logo_url: logo_url.unwrap_or_default(),
            conditions,
        }
    }

    /// Build a card from a raw detail payload.
    ///
    /// The only place where missing upstream fields are mapped to defaults.
    pub fn from_payload(payload: VacancyPayload) -> Self {
        let conditions = Conditions {
            form: or_not_selected(payload.employment.and_then(|e| e.name)),
            company: or_not_selected(payload.employer.as_ref().and_then(|e| e.name.clone())),
            web: or_not_selected(
                payload
                    .employer
                    .as_ref()
                    .and_then(|e| e.alternate_url.clone()),
            ),
            address: or_not_selected(payload.area.and_then(|a| a.name)),
        };

        let logo_url = payload
            .employer
            .and_then(|e| e.logo_urls)
            .and_then(|logos| logos.size_240);

        Self::new(
            payload.id,
            payload.name,
            payload.description,
            logo_url,
            conditions,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    /// Overwrite the description, e.g. from a later enrichment fetch.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Overwrite the logo URL.
    pub fn set_logo_url(&mut self, logo_url: impl Into<String>) {
        self.logo_url = logo_url.into();
    }

    /// Rendering representation consumed by the presentation layer.
    ///
    /// An empty logo URL becomes `None` so the logo is hidden rather than
    /// rendered blank.
    pub fn view(&self) -> CardView {
        CardView {
            id: self.id.clone(),
            title: self.title.clone(),
            logo: if self.logo_url.is_empty() {
                None
            } else {
                Some(self.logo_url.clone())
            },
            form: self.conditions.form.clone(),
            company: self.conditions.company.clone(),
            web: self.conditions.web.clone(),
            address: self.conditions.address.clone(),
            description: self.description.clone(),
        }
    }
}

/// Flattened view of a card for rendering and JSON output.
#[derive(Debug, Serialize, Clone)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub logo: Option<String>,
    pub form: String,
    pub company: String,
    pub web: String,
    pub address: String,
    pub description: String,
}

/// Replace a missing or blank upstream value with the display sentinel.
pub fn or_not_selected(value: Option<String>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => NOT_SELECTED.to_string(),
    }
}

/// Strip HTML tags and decode common entities from a vacancy description.
///
/// Descriptions arrive as HTML. Block and line breaks are turned into
/// newlines before the remaining tags are removed.
pub fn strip_html(text: &str) -> String {
    let breaks = Regex::new(r"(?i)<br\s*/?>|</p>|</li>").unwrap();
    let tags = Regex::new(r"<[^>]*>").unwrap();

    let text = breaks.replace_all(text, "\n");
    let text = tags.replace_all(&text, "");

    text.replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload_json() -> &'static str {
        r#"{
            "id": "45440028",
            "name": "Rust Engineer",
            "description": "<p>Build <strong>backend</strong> services</p>",
            "employer": {
                "name": "Acme",
                "alternate_url": "https://hh.ru/employer/42",
                "logo_urls": {
                    "240": "https://img.example/acme-240.png",
                    "original": "https://img.example/acme.png"
                }
            },
            "employment": { "name": "Full time" },
            "area": { "name": "Moscow" }
        }"#
    }

    #[test]
    fn test_or_not_selected_present() {
        assert_eq!(or_not_selected(Some("Acme".to_string())), "Acme");
    }

    #[test]
    fn test_or_not_selected_missing() {
        assert_eq!(or_not_selected(None), NOT_SELECTED);
    }

    #[test]
    fn test_or_not_selected_blank() {
        assert_eq!(or_not_selected(Some("   ".to_string())), NOT_SELECTED);
        assert_eq!(or_not_selected(Some(String::new())), NOT_SELECTED);
    }

    #[test]
    fn test_from_payload_full() {
        let payload: VacancyPayload = serde_json::from_str(full_payload_json()).unwrap();
        let card = Card::from_payload(payload);

        assert_eq!(card.id(), "45440028");
        assert_eq!(card.title(), "Rust Engineer");
        assert_eq!(
            card.description(),
            "<p>Build <strong>backend</strong> services</p>"
        );
        assert_eq!(card.logo_url(), "https://img.example/acme-240.png");
        assert_eq!(card.conditions().form, "Full time");
        assert_eq!(card.conditions().company, "Acme");
        assert_eq!(card.conditions().web, "https://hh.ru/employer/42");
        assert_eq!(card.conditions().address, "Moscow");
    }

    #[test]
    fn test_from_payload_missing_sections() {
        let payload: VacancyPayload =
            serde_json::from_str(r#"{ "id": "999" }"#).unwrap();
        let card = Card::from_payload(payload);

        assert_eq!(card.id(), "999");
        assert_eq!(card.title(), NOT_SELECTED);
        assert_eq!(card.description(), NOT_SELECTED);
        assert_eq!(card.logo_url(), "");
        assert_eq!(card.conditions(), &Conditions::default());
    }

    #[test]
    fn test_from_payload_partial_employer() {
        let payload: VacancyPayload = serde_json::from_str(
            r#"{ "id": "7", "employer": { "name": "Acme" } }"#,
        )
        .unwrap();
        let card = Card::from_payload(payload);

        assert_eq!(card.conditions().company, "Acme");
        assert_eq!(card.conditions().web, NOT_SELECTED);
        assert_eq!(card.logo_url(), "");
    }

    #[test]
    fn test_new_defaults() {
        let card = Card::new("1", None, None, None, Conditions::default());

        assert_eq!(card.title(), NOT_SELECTED);
        assert_eq!(card.description(), NOT_SELECTED);
        assert_eq!(card.logo_url(), "");
        assert_eq!(card.conditions().address, NOT_SELECTED);
    }

    #[test]
    fn test_view_hides_empty_logo() {
        let card = Card::new("1", Some("T".to_string()), None, None, Conditions::default());
        assert_eq!(card.view().logo, None);
    }

    #[test]
    fn test_view_keeps_logo() {
        let card = Card::new(
            "1",
            None,
            None,
            Some("https://img.example/a.png".to_string()),
            Conditions::default(),
        );
        assert_eq!(
            card.view().logo,
            Some("https://img.example/a.png".to_string())
        );
    }

    #[test]
    fn test_view_carries_conditions() {
        let payload: VacancyPayload = serde_json::from_str(full_payload_json()).unwrap();
        let view = Card::from_payload(payload).view();

        assert_eq!(view.title, "Rust Engineer");
        assert_eq!(view.form, "Full time");
        assert_eq!(view.company, "Acme");
        assert_eq!(view.web, "https://hh.ru/employer/42");
        assert_eq!(view.address, "Moscow");
    }

    #[test]
    fn test_setters_overwrite() {
        let mut card = Card::new("1", None, None, None, Conditions::default());

        card.set_description("Updated description");
        card.set_logo_url("https://img.example/new.png");

        assert_eq!(card.description(), "Updated description");
        assert_eq!(card.logo_url(), "https://img.example/new.png");
    }

    #[test]
    fn test_listing_page_parses() {
        let page: VacanciesPage = serde_json::from_str(
            r#"{
                "items": [ { "id": "1", "name": "A" }, { "id": "2" } ],
                "found": 1250,
                "pages": 250
            }"#,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items[1].name, None);
        assert_eq!(page.found, Some(1250));
    }

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(
            strip_html("<p>Build <strong>backend</strong> services</p>"),
            "Build backend services"
        );
    }

    #[test]
    fn test_strip_html_entities() {
        assert_eq!(
            strip_html("1 &lt; 2 &amp; 3 &gt; 0 &quot;ok&quot; &#39;yes&#39;"),
            "1 < 2 & 3 > 0 \"ok\" 'yes'"
        );
    }

    #[test]
    fn test_strip_html_breaks_become_newlines() {
        assert_eq!(
            strip_html("<p>First</p><p>Second<br>Third</p>"),
            "First\nSecond\nThird"
        );
    }
}
