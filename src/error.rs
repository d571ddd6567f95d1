use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{input}', expected DD.MM.YYYY: {source}")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("API request failed with status code {status}")]
    Api { status: u16 },

    #[error("Couldn't parse the API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),
}
