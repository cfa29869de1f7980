//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Generic page selector (`?page=N`, 1-based, default 1).
///
/// The window width is fixed at `canteen_core::pagination::PAGE_SIZE`.
/// A non-numeric value falls back to the first page rather than failing
/// the request, matching the legacy parser.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
