use serde::{Deserialize, Serialize};

/// One row of the output: a document picked from a results page by its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub number: usize,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub publication_date: String,
    pub document_number: String,
    #[serde(rename = "type")]
    pub document_type: String,
}

impl DocumentRecord {
    pub const COLUMNS: [&'static str; 6] = [
        "number",
        "title",
        "abstract",
        "publication_date",
        "document_number",
        "type",
    ];

    /// Cells in `COLUMNS` order. A missing abstract is an empty cell.
    pub fn cells(&self) -> [String; 6] {
        [
            self.number.to_string(),
            self.title.clone(),
            self.abstract_text.clone().unwrap_or_default(),
            self.publication_date.clone(),
            self.document_number.clone(),
            self.document_type.clone(),
        ]
    }
}

/// A document object as the search API returns it. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDocument {
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    pub publication_date: String,
    pub document_number: String,
    #[serde(rename = "type")]
    pub document_type: String,
}

/// A single page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    /// Total number of matching documents across all pages.
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<ApiDocument>,
}

impl SearchPage {
    /// Returns the document at a 1-based `position` within this page, if there is one.
    pub fn document_at(&self, position: usize) -> Option<DocumentRecord> {
        let doc = self.results.get(position.checked_sub(1)?)?;
        Some(DocumentRecord {
            number: position,
            title: doc.title.clone(),
            abstract_text: doc.abstract_text.clone(),
            publication_date: doc.publication_date.clone(),
            document_number: doc.document_number.clone(),
            document_type: doc.document_type.clone(),
        })
    }
}
