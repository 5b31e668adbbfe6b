use std::sync::Arc;

use chrono::Local;
use tokio::task::JoinHandle;

use crate::model::ArtworkId;
use crate::request::PageSource;
use crate::{info_time, Error, Result, START_PAGE};

/// Checks the requested row count against the last known total.
pub fn validate_count(requested: i64, total: u64) -> Result<usize> {
    if requested <= 0 {
        return Err(Error::InvalidCount);
    }
    let requested = requested as u64;
    if requested > total {
        return Err(Error::CountExceedsTotal { requested, total });
    }
    usize::try_from(requested).map_err(|_| Error::InvalidCount)
}

/// Walks the catalog from the first page, one page at a time, and returns the
/// ids of its first `n` records in page order.
///
/// Stops early if a page comes back empty, so the result can be shorter than
/// `n` when the catalog shrank since the total was read.
pub async fn collect_first_n<S: PageSource + ?Sized>(source: &S, n: usize) -> Result<Vec<ArtworkId>> {
    let start_time = Local::now();
    let mut collected = Vec::with_capacity(n);
    let mut page_num = START_PAGE;

    while collected.len() < n {
        let page = source.fetch_page(page_num).await?;
        if page.is_empty() {
            info_time!("Page {} is empty, catalog exhausted", page_num);
            break;
        }

        let missing = n - collected.len();
        collected.extend(page.ids().take(missing));
        info_time!("Collected {}/{} ids after page {}", collected.len(), n, page_num);
        page_num += 1;
    }

    info_time!(start_time, "Bulk select collected {} ids", collected.len());
    Ok(collected)
}

/// A bulk select running on its own task.
///
/// Dropping the handle does not stop the task; call `abort` for that.
#[derive(Debug)]
pub struct BulkSelect {
    requested: usize,
    handle: JoinHandle<Result<Vec<ArtworkId>>>,
}

impl BulkSelect {
    pub fn spawn(source: Arc<dyn PageSource>, requested: usize) -> Self {
        let handle = tokio::spawn(async move { collect_first_n(&*source, requested).await });
        Self { requested, handle }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the collected ids. Cancel safe: if this future is dropped the
    /// task keeps running and can be joined again.
    pub async fn join(&mut self) -> Result<Vec<ArtworkId>> {
        match (&mut self.handle).await {
            Ok(res) => res,
            Err(err) if err.is_cancelled() => Err(Error::BulkSelectCancelled),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "tests/bulk_tests.rs"]
mod tests;
