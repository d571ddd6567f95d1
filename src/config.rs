use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::{
    DOCUMENT_TYPE, ENDPOINT, FILE_PATH, FIRST_POSITION, LAST_POSITION, ORDER, PAGE, PER_PAGE,
    SCENARIO_END, SCENARIO_START,
};

/// Parameters of the document-search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub document_type: String,
    /// Only this many results are ever visible, no further pages are requested.
    pub per_page: usize,
    pub page: usize,
    pub order: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.into(),
            document_type: DOCUMENT_TYPE.into(),
            per_page: PER_PAGE,
            page: PAGE,
            order: ORDER.into(),
        }
    }
}

/// One extraction run: the date range (DD.MM.YYYY), the positions to pick and where to write them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub start_date: String,
    pub end_date: String,
    pub positions: RangeInclusive<usize>,
    pub output: PathBuf,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            start_date: SCENARIO_START.into(),
            end_date: SCENARIO_END.into(),
            positions: FIRST_POSITION..=LAST_POSITION,
            output: PathBuf::from(FILE_PATH),
        }
    }
}
