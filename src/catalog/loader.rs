//! Catalog file loading.
//!
//! The catalog is a JSON array of title records, read once before the UI
//! starts. Any failure here is fatal to startup.
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::Title;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file exceeds maximum allowed size.
    #[error("Catalog file too large: {0}")]
    TooLarge(String),

    /// Two records share an identifier.
    #[error("Duplicate title id {0} in catalog")]
    DuplicateId(u64),
}

/// Maximum catalog file size (16 MiB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Load and validate the catalog at `path`.
///
/// - Missing file → `Err(CatalogError::Io)`
/// - Larger than 16 MiB → `Err(CatalogError::TooLarge)`
/// - Not a JSON array of titles → `Err(CatalogError::Parse)` with line/column
/// - Repeated `id` → `Err(CatalogError::DuplicateId)`
pub fn load(path: &Path) -> Result<Vec<Title>, CatalogError> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_FILE_SIZE {
        return Err(CatalogError::TooLarge(format!(
            "Catalog file is {} bytes (max {} bytes)",
            meta.len(),
            MAX_FILE_SIZE
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let titles = parse_titles(&content)?;

    tracing::info!(path = %path.display(), titles = titles.len(), "Loaded catalog");
    Ok(titles)
}

/// Parse catalog JSON text and check id uniqueness.
pub fn parse_titles(content: &str) -> Result<Vec<Title>, CatalogError> {
    let titles: Vec<Title> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(titles.len());
    for title in &titles {
        if !seen.insert(title.id) {
            return Err(CatalogError::DuplicateId(title.id));
        }
        if title.categories.is_empty() {
            tracing::debug!(id = title.id, title = %title.title, "Title has no categories");
        }
    }

    Ok(titles)
}

// ============================================================================
// Tests
// ============================================================================
