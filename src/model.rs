use serde::Deserialize;

pub type ArtworkId = u64;

/// One artwork as returned by the catalog. Never mutated locally.
///
/// The catalog returns `null` for most of these fields on a good share of its
/// records, so everything except `id` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl ArtworkRecord {
    /// Record with only an id, everything else absent.
    pub fn bare(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// Body of `GET <endpoint>?page={n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub data: Vec<ArtworkRecord>,
    pub pagination: Pagination,
}

/// A fetched page: its 1-based number, its records in catalog order and the
/// total record count reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub records: Vec<ArtworkRecord>,
    pub total: u64,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(|r| r.id)
    }
}
