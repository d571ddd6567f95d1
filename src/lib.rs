//! Pulls presidential documents out of the Federal Register search API
//! and saves a fixed run of them, by position, as CSV.

mod config;
mod error;
mod macros;
pub mod model;
mod output;
mod parse;
pub mod process;
pub mod request;

pub use config::{ApiConfig, Scenario};
pub use error::{Error, Result};
pub use output::{render_table, write_csv};
pub use request::{Fetcher, HttpClient, HttpResponse, ReqwestClient};

pub const ENDPOINT: &str = "https://www.federalregister.gov/api/v1/documents";
pub const DOCUMENT_TYPE: &str = "PRESDOCU";
/// Positions past this are never reachable, only the first page is requested.
pub const PER_PAGE: usize = 20;
pub const PAGE: usize = 1;
pub const ORDER: &str = "oldest";

pub const SCENARIO_START: &str = "01.12.2010";
pub const SCENARIO_END: &str = "31.12.2010";
pub const FIRST_POSITION: usize = 1;
pub const LAST_POSITION: usize = 19;
pub const FILE_PATH: &str = "presidential_documents.csv";
