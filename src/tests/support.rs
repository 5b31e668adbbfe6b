use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::{ArtworkRecord, Page};
use crate::request::PageSource;
use crate::{Error, Result, PAGE_SIZE};

/// In-memory catalog with ids `1..=len`, served `PAGE_SIZE` records per page.
pub(crate) struct MemoryCatalog {
    records: Vec<ArtworkRecord>,
    reported_total: u64,
    fail_on: Option<u32>,
    hang_on: Option<u32>,
    requested: Mutex<Vec<u32>>,
}

impl MemoryCatalog {
    pub(crate) fn with_len(len: u64) -> Self {
        Self {
            records: (1..=len).map(ArtworkRecord::bare).collect(),
            reported_total: len,
            fail_on: None,
            hang_on: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Reports a total that disagrees with the records actually served.
    pub(crate) fn reporting_total(mut self, total: u64) -> Self {
        self.reported_total = total;
        self
    }

    /// Every request for `page` fails with a decode error.
    pub(crate) fn failing_on(mut self, page: u32) -> Self {
        self.fail_on = Some(page);
        self
    }

    /// Every request for `page` never completes.
    pub(crate) fn hanging_on(mut self, page: u32) -> Self {
        self.hang_on = Some(page);
        self
    }

    pub(crate) fn requested(&self) -> Vec<u32> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl PageSource for MemoryCatalog {
    async fn fetch_page(&self, page_num: u32) -> Result<Page> {
        if page_num == 0 {
            return Err(Error::InvalidPage(page_num));
        }
        self.requested.lock().expect("lock").push(page_num);

        if self.hang_on == Some(page_num) {
            std::future::pending::<()>().await;
        }
        if self.fail_on == Some(page_num) {
            let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            return Err(Error::ParsePage {
                page: page_num,
                source,
            });
        }

        let start = (page_num as usize - 1) * PAGE_SIZE;
        let records = self
            .records
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        Ok(Page {
            number: page_num,
            records,
            total: self.reported_total,
        })
    }
}
