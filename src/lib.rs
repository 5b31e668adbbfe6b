//! Pages through the Art Institute of Chicago artwork catalog and keeps row
//! selections across pages, including a "select the first N rows" shortcut.

mod error;
mod macros;

pub mod bulk;
pub mod command;
pub mod config;
pub mod model;
pub mod parse;
pub mod process;
pub mod render;
pub mod repl;
pub mod request;
pub mod selection;

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;

pub use error::{Error, Result};

/// Rows shown per table page. Matches the catalog's default page length.
pub const PAGE_SIZE: usize = 12;
pub const START_PAGE: u32 = 1;
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";
