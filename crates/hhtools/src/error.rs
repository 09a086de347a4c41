#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream API error [{status}]: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid vacancy ID or URL: {0}")]
    InvalidVacancyRef(String),
}
