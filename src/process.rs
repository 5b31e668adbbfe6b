use std::sync::Arc;

use chrono::Local;
use tracing::{error, warn};

use crate::bulk::{validate_count, BulkSelect};
use crate::model::ArtworkRecord;
use crate::request::PageSource;
use crate::selection::SelectionSet;
use crate::{info_time, Error, Result, PAGE_SIZE};

/// Everything a table front end needs: the page on screen, which of its rows
/// are checked, and the selection across all pages.
///
/// Rows on screen are checked iff their id is in the global selection; every
/// mutation below restores that before returning.
pub struct Session {
    source: Arc<dyn PageSource>,
    page_index: usize,
    records: Vec<ArtworkRecord>,
    total: u64,
    selection: SelectionSet,
    page_selection: Vec<ArtworkRecord>,
    bulk: Option<BulkSelect>,
}

impl Session {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            page_index: 0,
            records: Vec::new(),
            total: 0,
            selection: SelectionSet::new(),
            page_selection: Vec::new(),
            bulk: None,
        }
    }

    /// 0-based index of the page on screen.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        (self.total as usize).div_ceil(PAGE_SIZE)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Rows of the current page rendered as checked.
    pub fn page_selection(&self) -> &[ArtworkRecord] {
        &self.page_selection
    }

    pub fn is_row_selected(&self, row: usize) -> bool {
        self.records
            .get(row)
            .is_some_and(|r| self.selection.contains(r.id))
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Fetches page `page_index + 1` and makes it the current page.
    /// On error nothing changes.
    pub async fn load_page(&mut self, page_index: usize) -> Result<()> {
        let page_num = u32::try_from(page_index + 1).map_err(|_| Error::InvalidPage(0))?;
        let page = self.source.fetch_page(page_num).await?;

        self.page_index = page_index;
        self.total = page.total;
        self.records = page.records;
        self.page_selection = self.selection.selected_on_page(&self.records);
        Ok(())
    }

    /// `load_page`, logging a failure instead of returning it. The previous
    /// page stays on screen.
    pub async fn navigate(&mut self, page_index: usize) -> bool {
        match self.load_page(page_index).await {
            Ok(()) => true,
            Err(err) => {
                error!("Couldn't load page {}: {err}", page_index + 1);
                false
            }
        }
    }

    pub async fn next_page(&mut self) -> bool {
        if self.page_index + 1 >= self.page_count() {
            return false;
        }
        self.navigate(self.page_index + 1).await
    }

    pub async fn previous_page(&mut self) -> bool {
        match self.page_index.checked_sub(1) {
            Some(prev) => self.navigate(prev).await,
            None => false,
        }
    }

    /// The table's selection-change callback: `rows` is the complete set of
    /// checked rows on the current page after the user's gesture.
    pub fn set_page_selection(&mut self, rows: Vec<ArtworkRecord>) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.apply_page_selection(&self.records, &rows);
        self.page_selection = rows;
    }

    /// Flips the checkbox of the 0-based `row`.
    pub fn toggle_row(&mut self, row: usize) -> Result<()> {
        let record = self.records.get(row).ok_or(Error::InvalidRow {
            row,
            len: self.records.len(),
        })?;

        let rows = if self.selection.contains(record.id) {
            let id = record.id;
            self.page_selection
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect()
        } else {
            let mut rows = self.page_selection.clone();
            rows.push(record.clone());
            rows
        };
        self.set_page_selection(rows);
        Ok(())
    }

    pub fn select_all_on_page(&mut self) {
        self.set_page_selection(self.records.clone());
    }

    pub fn clear_page(&mut self) {
        self.set_page_selection(Vec::new());
    }

    pub fn bulk_in_flight(&self) -> bool {
        self.bulk.is_some()
    }

    /// Validates `requested` and starts collecting the first `requested` ids
    /// in the background. A bulk select that is still running is aborted.
    pub fn start_select_first_n(&mut self, requested: i64) -> Result<()> {
        let n = validate_count(requested, self.total)?;
        if self.cancel_bulk_select() {
            warn!("Superseded running bulk select with a new one for {n} rows");
        }
        info_time!("Starting bulk select of {} rows", n);
        self.bulk = Some(BulkSelect::spawn(self.source.clone(), n));
        Ok(())
    }

    /// Aborts the running bulk select, if any. Its result is never applied.
    pub fn cancel_bulk_select(&mut self) -> bool {
        match self.bulk.take() {
            Some(bulk) => {
                bulk.abort();
                true
            }
            None => false,
        }
    }

    /// Waits for the running bulk select and, if it succeeded, replaces the
    /// whole selection with its ids. Returns `None` when nothing is running.
    ///
    /// Cancel safe: dropping the future leaves the bulk select running.
    pub async fn wait_bulk_select(&mut self) -> Option<Result<usize>> {
        let bulk = self.bulk.as_mut()?;
        let res = bulk.join().await;
        self.bulk = None;

        Some(res.map(|ids| {
            self.selection = ids.into_iter().collect();
            self.page_selection = self.selection.selected_on_page(&self.records);
            self.selection.len()
        }))
    }

    /// Selects the first `requested` records of the catalog, discarding the
    /// previous selection. On error the selection is unchanged.
    pub async fn select_first_n(&mut self, requested: i64) -> Result<usize> {
        let start_time = Local::now();
        self.start_select_first_n(requested)?;
        let res = self
            .wait_bulk_select()
            .await
            .unwrap_or(Err(Error::BulkSelectCancelled));
        if let Ok(count) = &res {
            info_time!(start_time, "Selected the first {} rows", count);
        }
        res
    }
}

#[cfg(test)]
#[path = "tests/process_tests.rs"]
mod tests;
