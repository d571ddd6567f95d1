use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use url::Url;

use crate::model::{DocumentRecord, SearchPage};
use crate::parse::{parse_page, to_api_date};
use crate::{debug_time, info_time, ApiConfig, Error, Result};

/// Status and body of a finished GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a single GET. Non-success statuses are returned, not raised.
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

#[async_trait]
impl<'a, T: HttpClient + ?Sized> HttpClient for &'a T {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

/// `HttpClient` backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Looks up presidential documents through an `HttpClient`.
pub struct Fetcher<C> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Builds the search URL for a `DD.MM.YYYY` date range.
    pub fn search_url(&self, start_date: &str, end_date: &str) -> Result<Url> {
        let start = to_api_date(start_date)?;
        let end = to_api_date(end_date)?;
        let per_page = self.config.per_page.to_string();
        let page = self.config.page.to_string();

        let url = Url::parse_with_params(
            &self.config.endpoint,
            [
                ("conditions[type][]", self.config.document_type.as_str()),
                ("conditions[publication_date][gte]", start.as_str()),
                ("conditions[publication_date][lte]", end.as_str()),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
                ("order", self.config.order.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Requests the one configured page of results for the date range.
    pub async fn fetch_page(&self, start_date: &str, end_date: &str) -> Result<SearchPage> {
        let url = self.search_url(start_date, end_date)?;
        let start_time = Local::now();
        info_time!("Fetching documents: {}", url);

        let res = self.client.get(&url).await?;
        if !res.is_success() {
            return Err(Error::Api { status: res.status });
        }

        let page = parse_page(&res.body)?;
        match page.count {
            Some(count) => info_time!(start_time, "Total documents available: {}", count),
            None => info_time!(start_time, "Total documents available: Not available"),
        }
        debug_time!("{} results on page {}", page.results.len(), self.config.page);

        Ok(page)
    }

    /// Returns the document at a 1-based `position` within the first page, or `None`
    /// when the page holds fewer documents.
    pub async fn fetch(
        &self,
        start_date: &str,
        end_date: &str,
        position: usize,
    ) -> Result<Option<DocumentRecord>> {
        let page = self.fetch_page(start_date, end_date).await?;
        Ok(page.document_at(position))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Canned {
        status: u16,
        body: String,
        seen: Mutex<Vec<Url>>,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.into(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for Canned {
        async fn get(&self, url: &Url) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(url.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    const TWO_DOCS: &str = r#"{"count": 2, "results": [
        {"title": "A", "abstract": "first", "publication_date": "2010-12-01",
         "document_number": "2010-1", "type": "Presidential Document"},
        {"title": "B", "abstract": null, "publication_date": "2010-12-02",
         "document_number": "2010-2", "type": "Presidential Document"}
    ]}"#;

    #[test]
    fn search_url_carries_all_filters() {
        let fetcher = Fetcher::new(Canned::new(200, "{}"), ApiConfig::default());
        let url = fetcher.search_url("01.12.2010", "31.12.2010").unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let expect = [
            ("conditions[type][]", "PRESDOCU"),
            ("conditions[publication_date][gte]", "2010-12-01"),
            ("conditions[publication_date][lte]", "2010-12-31"),
            ("per_page", "20"),
            ("page", "1"),
            ("order", "oldest"),
        ];
        assert_eq!(pairs.len(), expect.len());
        for ((k, v), (ek, ev)) in pairs.iter().zip(expect) {
            assert_eq!((k.as_str(), v.as_str()), (ek, ev));
        }
        assert!(url
            .as_str()
            .starts_with("https://www.federalregister.gov/api/v1/documents?"));
    }

    #[test]
    fn bad_endpoint_is_invalid_url() {
        let config = ApiConfig {
            endpoint: "not a url".into(),
            ..ApiConfig::default()
        };
        let fetcher = Fetcher::new(Canned::new(200, "{}"), config);
        assert!(matches!(
            fetcher.search_url("01.12.2010", "31.12.2010"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn fetch_returns_document_at_position() {
        let fetcher = Fetcher::new(Canned::new(200, TWO_DOCS), ApiConfig::default());

        let rec = fetcher.fetch("01.12.2010", "31.12.2010", 2).await.unwrap().unwrap();
        assert_eq!(rec.number, 2);
        assert_eq!(rec.title, "B");
        assert_eq!(rec.abstract_text, None);
        assert_eq!(rec.document_number, "2010-2");
    }

    #[tokio::test]
    async fn fetch_past_page_is_none() {
        let fetcher = Fetcher::new(Canned::new(200, TWO_DOCS), ApiConfig::default());
        let rec = fetcher.fetch("01.12.2010", "31.12.2010", 3).await.unwrap();
        assert!(rec.is_none());
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let fetcher = Fetcher::new(Canned::new(503, "busy"), ApiConfig::default());
        let err = fetcher.fetch("01.12.2010", "31.12.2010", 1).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 503 }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn bad_date_fails_before_request() {
        let client = Canned::new(200, TWO_DOCS);
        let fetcher = Fetcher::new(client, ApiConfig::default());
        let err = fetcher.fetch("2010-12-01", "31.12.2010", 1).await.unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert!(fetcher.client.seen.lock().unwrap().is_empty());
    }
}
