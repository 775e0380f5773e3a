//! Placement store: placed items, selection, clipboard, and every mutation.
//!
//! DESIGN
//! ======
//! `PlacementStore` is a plain owned-state object. Each method is one
//! synchronous state transition; nothing suspends, and callers are expected to
//! serialize access from a single UI loop. Validity is never stored: hosts ask
//! for [`PlacementStore::items_with_validity`] with the current grid after any
//! change (including a grid resize) and get fresh copies back.
//!
//! Bad input never errors. Unknown catalog or instance ids are no-ops, batch
//! placements skip entries that find no room, and a group move that would land
//! any member off-grid or on a non-selected item is rejected whole. Every
//! mutation reports whether it changed anything so hosts can skip re-renders.
//!
//! INVARIANTS
//! ==========
//! - Instance ids are unique across `items`.
//! - `selected` only holds ids present in `items`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::geom::{self, Rect};
use crate::input::{DragData, Modifiers, RotateDirection};
use crate::item::{Grid, InstanceId, PlacedItem, PlacedItemWithValidity, new_instance_id};
use crate::validity;

#[derive(Debug, Clone, Default)]
pub struct PlacementStore {
    items: Vec<PlacedItem>,
    selected: HashSet<InstanceId>,
    clipboard: Vec<PlacedItem>,
    config: EngineConfig,
}

impl PlacementStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Placed items in placement order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Look up a placed item by instance id.
    #[must_use]
    pub fn item(&self, id: InstanceId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.instance_id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every item paired with its validity on `grid`, recomputed from scratch.
    #[must_use]
    pub fn items_with_validity(&self, grid: Grid) -> Vec<PlacedItemWithValidity> {
        validity::with_validity(&self.items, grid)
    }

    /// Number of items that are off-grid or overlapping on `grid`.
    #[must_use]
    pub fn invalid_count(&self, grid: Grid) -> usize {
        validity::evaluate(&self.items, grid)
            .into_iter()
            .filter(|valid| !valid)
            .count()
    }

    #[must_use]
    pub fn selected_ids(&self) -> &HashSet<InstanceId> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: InstanceId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected items in placement order.
    #[must_use]
    pub fn selected_items(&self) -> Vec<&PlacedItem> {
        self.items
            .iter()
            .filter(|item| self.selected.contains(&item.instance_id))
            .collect()
    }

    /// The first selected id in placement order, for single-selection callers.
    #[must_use]
    pub fn first_selected(&self) -> Option<InstanceId> {
        self.items
            .iter()
            .map(|item| item.instance_id)
            .find(|id| self.selected.contains(id))
    }

    /// Snapshots captured by the last [`PlacementStore::copy_items`].
    #[must_use]
    pub fn clipboard(&self) -> &[PlacedItem] {
        &self.clipboard
    }

    // =========================================================================
    // SINGLE-ITEM MUTATIONS
    // =========================================================================

    /// Place a new instance of catalog entry `item_id` with its top-left cell at `(x, y)`.
    ///
    /// The new item becomes the sole selection. Returns `None` without
    /// touching state if the catalog has no such entry.
    pub fn add_item<C: Catalog + ?Sized>(&mut self, catalog: &C, item_id: &str, x: i32, y: i32) -> Option<InstanceId> {
        let Some(template) = catalog.lookup(item_id) else {
            debug!(%item_id, "add ignored: unknown catalog item");
            return None;
        };
        let item = PlacedItem::new(item_id, x, y, template.width_units, template.height_units);
        let id = item.instance_id;
        self.items.push(item);
        self.selected.clear();
        self.selected.insert(id);
        Some(id)
    }

    /// Move an item's top-left cell to `(x, y)`. No validity check.
    pub fn move_item(&mut self, id: InstanceId, x: i32, y: i32) -> bool {
        let Some(item) = self.item_mut(id) else {
            debug!(%id, "move ignored: unknown instance");
            return false;
        };
        item.x = x;
        item.y = y;
        true
    }

    /// Rotate an item one quarter turn.
    pub fn rotate_item(&mut self, id: InstanceId, direction: RotateDirection) -> bool {
        let Some(item) = self.item_mut(id) else {
            debug!(%id, "rotate ignored: unknown instance");
            return false;
        };
        item.rotate(direction);
        true
    }

    /// Remove an item, dropping it from the selection too.
    pub fn delete_item(&mut self, id: InstanceId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.instance_id != id);
        if self.items.len() == before {
            debug!(%id, "delete ignored: unknown instance");
            return false;
        }
        self.selected.remove(&id);
        true
    }

    /// Remove every item and clear the selection. The clipboard survives.
    pub fn clear_all(&mut self) {
        info!(count = self.items.len(), "clearing layout");
        self.items.clear();
        self.selected.clear();
    }

    /// Replace the customization payload. Geometry, selection, and validity are unaffected.
    pub fn update_item_customization(&mut self, id: InstanceId, customization: Option<serde_json::Value>) -> bool {
        let Some(item) = self.item_mut(id) else {
            debug!(%id, "customization ignored: unknown instance");
            return false;
        };
        item.customization = customization;
        true
    }

    /// Replace the whole layout, e.g. when restoring a saved one.
    ///
    /// Every entry gets a fresh instance id; incoming ids are never trusted.
    /// The selection is cleared.
    pub fn load_items(&mut self, items: Vec<PlacedItem>) {
        info!(count = items.len(), "loading layout");
        self.items = items
            .into_iter()
            .map(|item| PlacedItem { instance_id: new_instance_id(), ..item })
            .collect();
        self.selected.clear();
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Apply a selection click.
    ///
    /// `None` clears the selection. Otherwise Ctrl/Meta toggles `id`, Shift adds
    /// it, and a plain click selects only `id`. Ids not on the grid are ignored.
    pub fn select_item(&mut self, id: Option<InstanceId>, modifiers: Modifiers) -> bool {
        let Some(id) = id else {
            self.selected.clear();
            return true;
        };
        if self.item(id).is_none() {
            debug!(%id, "select ignored: unknown instance");
            return false;
        }
        if modifiers.toggles() {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else if modifiers.shift {
            self.selected.insert(id);
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
        true
    }

    /// Select every item. No-op on an empty layout.
    pub fn select_all(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.selected = self.items.iter().map(|item| item.instance_id).collect();
        true
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    // =========================================================================
    // DROP
    // =========================================================================

    /// Handle a drop at grid cell `(x, y)`.
    ///
    /// A library drag places a new item. A placed drag whose item belongs to a
    /// multi-selection moves the whole selection by the same delta, all or
    /// nothing; any other placed drag is a plain [`PlacementStore::move_item`].
    pub fn handle_drop<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        grid: Grid,
        drag: &DragData,
        x: i32,
        y: i32,
    ) -> bool {
        match drag {
            DragData::Library { item_id } => self.add_item(catalog, item_id, x, y).is_some(),
            DragData::Placed { instance_id, .. } => {
                if self.selected.len() > 1 && self.selected.contains(instance_id) {
                    self.group_move(grid, *instance_id, x, y)
                } else {
                    self.move_item(*instance_id, x, y)
                }
            }
        }
    }

    /// Move every selected item so that `anchor` lands on `(x, y)`.
    ///
    /// Each member must end up on the grid and clear of every non-selected
    /// item; members are not checked against each other since they move
    /// together. One failing member rejects the whole move.
    fn group_move(&mut self, grid: Grid, anchor: InstanceId, x: i32, y: i32) -> bool {
        let Some(dragged) = self.item(anchor) else {
            return false;
        };
        let dx = i64::from(x) - i64::from(dragged.x);
        let dy = i64::from(y) - i64::from(dragged.y);

        let stationary: Vec<Rect> = self
            .items
            .iter()
            .filter(|item| !self.selected.contains(&item.instance_id))
            .map(PlacedItem::rect)
            .collect();
        let targets: Option<Vec<(InstanceId, Rect)>> = self
            .items
            .iter()
            .filter(|item| self.selected.contains(&item.instance_id))
            .map(|item| {
                let moved = shifted(item.rect(), dx, dy)?;
                geom::is_free(&moved, grid, &stationary).then_some((item.instance_id, moved))
            })
            .collect();
        let Some(targets) = targets else {
            debug!(%anchor, dx, dy, "group move rejected: a member would be off-grid or colliding");
            return false;
        };

        for (id, moved) in targets {
            if let Some(item) = self.item_mut(id) {
                item.x = moved.x;
                item.y = moved.y;
            }
        }
        true
    }

    // =========================================================================
    // SELECTION BATCHES
    // =========================================================================

    /// Remove every selected item and clear the selection.
    pub fn delete_selected(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        let selected = &self.selected;
        self.items.retain(|item| !selected.contains(&item.instance_id));
        self.selected.clear();
        true
    }

    /// Rotate every selected item one quarter turn in place.
    pub fn rotate_selected(&mut self, direction: RotateDirection) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        let selected = &self.selected;
        for item in self.items.iter_mut().filter(|item| selected.contains(&item.instance_id)) {
            item.rotate(direction);
        }
        true
    }

    /// Shift every selected item by `(dx, dy)`. No validity check.
    pub fn move_selected(&mut self, dx: i32, dy: i32) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.translate_selected(dx, dy);
        true
    }

    fn translate_selected(&mut self, dx: i32, dy: i32) {
        let selected = &self.selected;
        for item in self.items.iter_mut().filter(|item| selected.contains(&item.instance_id)) {
            item.translate(dx, dy);
        }
    }

    /// Duplicate every selected item into the nearest free spot.
    ///
    /// Each search starts diagonally past its source (by the configured
    /// offset) and avoids every item, including duplicates already placed by
    /// this call. Items with no room are skipped. The copies become the
    /// selection; if none fit, nothing changes. Returns the new ids.
    pub fn duplicate_item(&mut self, grid: Grid) -> Vec<InstanceId> {
        let offset = self.config.duplicate_offset;
        let sources: Vec<PlacedItem> = self.selected_items().into_iter().cloned().collect();
        let placements = sources
            .iter()
            .map(|item| (item, (item.x.saturating_add(offset), item.y.saturating_add(offset))));
        let placed = self.place_batch(grid, placements, "duplicate");
        self.adopt_placements(placed)
    }

    /// Snapshot the selected items into the clipboard, replacing its contents.
    ///
    /// An empty selection empties the clipboard.
    pub fn copy_items(&mut self) {
        self.clipboard = self.selected_items().into_iter().cloned().collect();
    }

    /// Place every clipboard entry into the free spot nearest the grid center.
    ///
    /// Entries keep their clipboard order and avoid everything already placed,
    /// including earlier entries from this paste. Entries with no room are
    /// skipped. The pasted items become the selection. Returns the new ids.
    pub fn paste_items(&mut self, grid: Grid) -> Vec<InstanceId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let center = grid.center();
        let entries = self.clipboard.clone();
        let placed = self.place_batch(grid, entries.iter().map(|item| (item, center)), "paste");
        self.adopt_placements(placed)
    }

    /// Find a spot for each `(template, start)` pair, avoiding existing items
    /// and earlier placements from the same batch.
    fn place_batch<'a>(
        &self,
        grid: Grid,
        placements: impl Iterator<Item = (&'a PlacedItem, (i32, i32))>,
        op: &str,
    ) -> Vec<PlacedItem> {
        let radius = self.config.search_radius(grid);
        let mut avoid: Vec<Rect> = self.items.iter().map(PlacedItem::rect).collect();
        let mut placed = Vec::new();
        for (template, start) in placements {
            match geom::find_free_position(start, template.width, template.height, grid, &avoid, radius) {
                Some((x, y)) => {
                    let copy = template.duplicate_at(x, y);
                    avoid.push(copy.rect());
                    placed.push(copy);
                }
                None => {
                    debug!(op, item_id = %template.item_id, "no free position; entry skipped");
                }
            }
        }
        placed
    }

    /// Append freshly placed items and make them the selection.
    fn adopt_placements(&mut self, placed: Vec<PlacedItem>) -> Vec<InstanceId> {
        if placed.is_empty() {
            return Vec::new();
        }
        let ids: Vec<InstanceId> = placed.iter().map(|item| item.instance_id).collect();
        self.items.extend(placed);
        self.selected = ids.iter().copied().collect();
        ids
    }

    fn item_mut(&mut self, id: InstanceId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.instance_id == id)
    }
}

/// `rect` moved by a wide delta, or `None` when the new corner leaves `i32`.
fn shifted(rect: Rect, dx: i64, dy: i64) -> Option<Rect> {
    let Ok(x) = i32::try_from(i64::from(rect.x) + dx) else {
        return None;
    };
    let Ok(y) = i32::try_from(i64::from(rect.y) + dy) else {
        return None;
    };
    Some(rect.at(x, y))
}
