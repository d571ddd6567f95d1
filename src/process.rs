use std::fmt;
use std::path::PathBuf;

use chrono::Local;

use crate::model::{DocumentRecord, SearchPage};
use crate::output::{render_table, write_csv};
use crate::request::{Fetcher, HttpClient};
use crate::{debug_time, info_time, Result, Scenario};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoDocuments,
    Written { path: PathBuf, rows: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoDocuments => write!(f, "No documents found in the specified time period"),
            Outcome::Written { path, .. } => write!(f, "Data saved to {}", path.display()),
        }
    }
}

/// Runs the whole extraction for a scenario: fetch, pick by position, print, write.
/// On error nothing is written and everything collected so far is dropped.
pub async fn run<C: HttpClient>(fetcher: &Fetcher<C>, scenario: &Scenario) -> Result<Outcome> {
    let start_time = Local::now();
    info_time!(
        "Extracting positions {}..={} from {} to {}",
        scenario.positions.start(),
        scenario.positions.end(),
        scenario.start_date,
        scenario.end_date
    );

    // Every position shares the same single page, so it's requested once.
    let page = fetcher
        .fetch_page(&scenario.start_date, &scenario.end_date)
        .await?;
    let documents = collect_documents(&page, scenario);

    if documents.is_empty() {
        info_time!(start_time, "No documents found");
        return Ok(Outcome::NoDocuments);
    }

    println!(
        "\nPresidential Documents ({} to {}):",
        scenario.start_date, scenario.end_date
    );
    println!("{}", render_table(&documents));

    write_csv(&scenario.output, &documents)?;
    info_time!(
        start_time,
        "Wrote {} documents to {}",
        documents.len(),
        scenario.output.display()
    );

    Ok(Outcome::Written {
        path: scenario.output.clone(),
        rows: documents.len(),
    })
}

/// Picks the scenario's positions out of the page, in order, skipping ones past its end.
fn collect_documents(page: &SearchPage, scenario: &Scenario) -> Vec<DocumentRecord> {
    // Nothing past the end of the page can match.
    let last = (*scenario.positions.end()).min(page.results.len());
    if last < *scenario.positions.end() {
        debug_time!("Positions after {} are past the fetched page", last);
    }
    (*scenario.positions.start()..=last)
        .filter_map(|position| page.document_at(position))
        .collect()
}
