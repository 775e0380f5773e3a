//! Data model: placed items, the grid they sit on, and the validity projection.
//!
//! A [`PlacedItem`] is one bin instance on the grid. Coordinates are integer
//! cells measured from the top-left corner; they may be negative or run past
//! the grid edge, which makes the item invalid but never illegal. The
//! [`PlacedItemWithValidity`] projection pairs an item with its derived validity and
//! is rebuilt on demand, never stored.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Rect;
use crate::input::RotateDirection;
use crate::rotation::{self, Rotation};

/// Unique identifier for a placed item. Generated at creation, never reused.
pub type InstanceId = Uuid;

/// Generate a fresh instance id.
#[must_use]
pub fn new_instance_id() -> InstanceId {
    Uuid::new_v4()
}

/// Grid dimensions in cells. Owned by the host and allowed to change at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Number of columns.
    pub x: i32,
    /// Number of rows.
    pub y: i32,
}

impl Grid {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the grid has no cells at all.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x <= 0 || self.y <= 0
    }

    /// The integer center cell, `(floor(x / 2), floor(y / 2))`.
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (self.x.div_euclid(2), self.y.div_euclid(2))
    }

    /// Chebyshev radius needed for a ring search to reach every cell.
    #[must_use]
    pub fn max_radius(self) -> i32 {
        self.x.max(self.y)
    }
}

/// One bin instance on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Unique per placement.
    pub instance_id: InstanceId,
    /// Catalog entry this item was created from.
    pub item_id: String,
    /// Column of the top-left cell.
    pub x: i32,
    /// Row of the top-left cell.
    pub y: i32,
    /// Span in columns at the current rotation.
    pub width: i32,
    /// Span in rows at the current rotation.
    pub height: i32,
    /// Current orientation.
    #[serde(default)]
    pub rotation: Rotation,
    /// Opaque payload owned by the customization editor; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<serde_json::Value>,
}

impl PlacedItem {
    /// Create an upright item with a fresh instance id.
    #[must_use]
    pub fn new(item_id: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            instance_id: new_instance_id(),
            item_id: item_id.into(),
            x,
            y,
            width,
            height,
            rotation: Rotation::Deg0,
            customization: None,
        }
    }

    /// Bounding box in grid cells.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Rotate one quarter turn, swapping width and height when orientation parity changes.
    pub fn rotate(&mut self, direction: RotateDirection) {
        let (rotation, width, height) = rotation::rotate(self.rotation, self.width, self.height, direction);
        self.rotation = rotation;
        self.width = width;
        self.height = height;
    }

    /// Shift by a cell delta, saturating at the `i32` limits.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Value copy at a new position with a fresh instance id.
    ///
    /// Shape, rotation, catalog id, and customization carry over.
    #[must_use]
    pub fn duplicate_at(&self, x: i32, y: i32) -> Self {
        Self { instance_id: new_instance_id(), x, y, ..self.clone() }
    }
}

/// A placed item paired with its derived validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItemWithValidity {
    /// Snapshot of the item; mutating it does not touch the store.
    #[serde(flatten)]
    pub item: PlacedItem,
    /// In bounds and not overlapping any other item.
    pub is_valid: bool,
}
