use chrono::NaiveDate;

use crate::model::SearchPage;
use crate::{Error, Result};

const INPUT_DATE_FMT: &str = "%d.%m.%Y";
const API_DATE_FMT: &str = "%Y-%m-%d";

/// Converts a `DD.MM.YYYY` date into the `YYYY-MM-DD` form the API filters on.
pub(crate) fn to_api_date(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, INPUT_DATE_FMT).map_err(|source| Error::Format {
        input: date.into(),
        source,
    })?;
    Ok(parsed.format(API_DATE_FMT).to_string())
}

/// Parses a response body into a `SearchPage`.
pub(crate) fn parse_page(body: &str) -> Result<SearchPage> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_api_date() {
        assert_eq!(to_api_date("01.12.2010").unwrap(), "2010-12-01");
        assert_eq!(to_api_date("31.12.2010").unwrap(), "2010-12-31");
        assert_eq!(to_api_date("29.02.2012").unwrap(), "2012-02-29");
    }

    #[test]
    fn rejects_dates_in_other_forms() {
        for bad in ["2010-12-01", "31.02.2010", "", "1.12"] {
            match to_api_date(bad) {
                Err(Error::Format { input, .. }) => assert_eq!(input, bad),
                other => panic!("expected format error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_page_with_null_abstract() {
        let body = r#"{
            "count": 42,
            "total_pages": 3,
            "results": [{
                "title": "Proclamation 8611",
                "abstract": null,
                "publication_date": "2010-12-03",
                "document_number": "2010-30598",
                "type": "Presidential Document",
                "html_url": "https://example.org"
            }]
        }"#;

        let page = parse_page(body).unwrap();
        assert_eq!(page.count, Some(42));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].abstract_text, None);
        assert_eq!(page.results[0].document_number, "2010-30598");
    }

    #[test]
    fn missing_count_is_none() {
        let page = parse_page(r#"{"results": []}"#).unwrap();
        assert_eq!(page.count, None);
        assert!(page.results.is_empty());
    }

    #[test]
    fn missing_results_is_parse_error() {
        assert!(matches!(parse_page("{}"), Err(Error::Parse(_))));
        assert!(matches!(
            parse_page(r#"{"count": 3}"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse_page("<html>"), Err(Error::Parse(_))));
    }
}
