//! Library catalog: the templates bins are instantiated from.
//!
//! The engine only needs one thing from a catalog, a size lookup by id, and
//! reaches it through the [`Catalog`] trait so hosts can back it with whatever
//! they load. [`Library`] is the stock implementation, read from the library
//! index document the model pipeline writes:
//!
//! ```json
//! { "version": "1.0.0",
//!   "items": [ { "id": "bin-1x2", "name": "1x2 Bin", "widthUnits": 1, "heightUnits": 2,
//!                "color": "#3B82F6", "categories": [], "imageUrl": "bin_1x2.png" } ] }
//! ```

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A template that can be placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    /// Stable catalog id, e.g. `"bin-2x2"`.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Width in grid cells when upright.
    pub width_units: i32,
    /// Height in grid cells when upright.
    pub height_units: i32,
    /// Display color as a CSS hex string.
    #[serde(default)]
    pub color: String,
    /// Free-form grouping tags.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Top-down preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Angled preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_image_url: Option<String>,
}

impl LibraryItem {
    /// Minimal template with only an id and a size.
    #[must_use]
    pub fn new(id: impl Into<String>, width_units: i32, height_units: i32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            width_units,
            height_units,
            color: String::new(),
            categories: Vec::new(),
            image_url: None,
            perspective_image_url: None,
        }
    }
}

/// Lookup of library templates by id.
pub trait Catalog {
    /// The template with `item_id`, or `None` if the catalog has no such entry.
    fn lookup(&self, item_id: &str) -> Option<&LibraryItem>;
}

impl Catalog for HashMap<String, LibraryItem> {
    fn lookup(&self, item_id: &str) -> Option<&LibraryItem> {
        self.get(item_id)
    }
}

impl Catalog for [LibraryItem] {
    fn lookup(&self, item_id: &str) -> Option<&LibraryItem> {
        self.iter().find(|item| item.id == item_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid library index: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("library item {id} has non-positive size {width}x{height}")]
    InvalidSize { id: String, width: i32, height: i32 },
    #[error("duplicate library item id: {0}")]
    DuplicateId(String),
}

/// On-disk shape of a library index.
#[derive(Debug, Deserialize)]
struct LibraryIndex {
    #[serde(default)]
    version: String,
    items: Vec<LibraryItem>,
}

/// In-memory catalog keyed by id, preserving document order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    version: String,
    items: Vec<LibraryItem>,
    by_id: HashMap<String, usize>,
}

impl Library {
    /// Parse and validate a library index document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON, `InvalidSize` for an entry with a
    /// zero or negative span, and `DuplicateId` when two entries share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let index: LibraryIndex = serde_json::from_str(json)?;
        let mut library = Self::from_items(index.items)?;
        library.version = index.version;
        Ok(library)
    }

    /// Build a catalog from templates.
    ///
    /// # Errors
    ///
    /// Same validation as [`Library::from_json`], minus parsing.
    pub fn from_items(items: Vec<LibraryItem>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.width_units <= 0 || item.height_units <= 0 {
                return Err(CatalogError::InvalidSize {
                    id: item.id.clone(),
                    width: item.width_units,
                    height: item.height_units,
                });
            }
            if by_id.insert(item.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { version: String::new(), items, by_id })
    }

    /// Index format version, empty when the document did not declare one.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Templates in document order.
    #[must_use]
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for Library {
    fn lookup(&self, item_id: &str) -> Option<&LibraryItem> {
        self.by_id.get(item_id).map(|&index| &self.items[index])
    }
}

/// `<W>x<H>` size token in a model name.
static DIMENSIONS: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"(?i)(\d+)x(\d+)"));

/// Size encoded in a model name as a `<W>x<H>` token, e.g. `"Utensils 1x3"` → `(1, 3)`.
///
/// Only the first token counts; case-insensitive on the `x`. A zero or
/// oversized span in that token means no size.
#[must_use]
pub fn dimensions_from_name(name: &str) -> Option<(i32, i32)> {
    let Ok(pattern) = &*DIMENSIONS else {
        return None;
    };
    let (_, [width, height]) = pattern.captures(name)?.extract();
    let (Ok(width), Ok(height)) = (width.parse::<i32>(), height.parse::<i32>()) else {
        return None;
    };
    (width > 0 && height > 0).then_some((width, height))
}
