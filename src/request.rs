use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;

use crate::model::Page;
use crate::parse::parse_page;
use crate::{info_time, Error, Result};

/// Anything that can hand out catalog pages by their 1-based number.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page_num: u32) -> Result<Page>;
}

/// HTTP page source for `GET <endpoint>?page={n}`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    // Client uses Arc so we can clone cheaply
    client: Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Client whose requests give up after `timeout`. Without one a hung
    /// request blocks the caller indefinitely.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    fn page_url(&self, page_num: u32) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{sep}page={page_num}", self.endpoint)
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    /// Requests a page and decodes it. Non-2xx statuses count as transport errors.
    async fn fetch_page(&self, page_num: u32) -> Result<Page> {
        if page_num == 0 {
            return Err(Error::InvalidPage(page_num));
        }
        let start_time = Local::now();

        let res = self
            .client
            .get(self.page_url(page_num))
            .send()
            .await?
            .error_for_status()?;
        let body = res.text().await?;
        let page = parse_page(page_num, &body)?;

        info_time!(
            start_time,
            "Fetched page {}: {} records of {}",
            page_num,
            page.records.len(),
            page.total
        );
        Ok(page)
    }
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
