//! Validity evaluator: per-item bounds and overlap status from an occupancy count.
//!
//! DESIGN
//! ======
//! Rather than comparing every pair of items, each on-grid cell counts how
//! many items cover it. An item collides when any of its cells has a count
//! above one. The whole pass costs O(occupied cells) and is rebuilt from
//! scratch on every call; validity is a pure function of (items, grid) and
//! nothing is cached across grid resizes.

#[cfg(test)]
#[path = "validity_test.rs"]
mod validity_test;

use crate::geom::Rect;
use crate::item::{Grid, PlacedItem, PlacedItemWithValidity};

/// Per-cell coverage counts for one grid.
pub struct Occupancy {
    grid: Grid,
    counts: Vec<u32>,
}

impl Occupancy {
    /// Count the on-grid coverage of every rectangle in `rects`.
    ///
    /// Cells outside the grid are ignored; an empty grid yields no cells.
    #[must_use]
    pub fn build<'a>(grid: Grid, rects: impl IntoIterator<Item = &'a Rect>) -> Self {
        let cells = if grid.is_empty() { 0 } else { cell_count(grid) };
        let mut occupancy = Self { grid, counts: vec![0; cells] };
        for rect in rects {
            occupancy.cover(rect);
        }
        occupancy
    }

    fn cover(&mut self, rect: &Rect) {
        for index in cell_indices(self.grid, *rect) {
            self.counts[index] += 1;
        }
    }

    /// Number of items covering cell `(x, y)`; zero off-grid.
    ///
    /// Inspection only. The evaluator reads counts through [`Occupancy::is_contested`].
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn count(&self, x: i32, y: i32) -> u32 {
        if x < 0 || y < 0 || x >= self.grid.x || y >= self.grid.y {
            return 0;
        }
        self.counts[y as usize * self.grid.x as usize + x as usize]
    }

    /// Whether any on-grid cell of `rect` is covered more than once.
    #[must_use]
    pub fn is_contested(&self, rect: &Rect) -> bool {
        cell_indices(self.grid, *rect).any(|index| self.counts[index] > 1)
    }
}

/// Row-major indices of the on-grid cells `rect` covers.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn cell_indices(grid: Grid, rect: Rect) -> impl Iterator<Item = usize> {
    let x0 = i64::from(rect.x.max(0));
    let y0 = i64::from(rect.y.max(0));
    let x1 = rect.right().min(i64::from(grid.x));
    let y1 = rect.bottom().min(i64::from(grid.y));
    let stride = grid.x.max(0) as usize;
    (y0..y1).flat_map(move |y| (x0..x1).map(move |x| y as usize * stride + x as usize))
}

#[allow(clippy::cast_sign_loss)]
fn cell_count(grid: Grid) -> usize {
    grid.x as usize * grid.y as usize
}

/// Validity of each item in `items`, in the same order.
///
/// An item is valid iff it lies entirely on the grid and shares no cell with another item.
#[must_use]
pub fn evaluate(items: &[PlacedItem], grid: Grid) -> Vec<bool> {
    let rects: Vec<Rect> = items.iter().map(PlacedItem::rect).collect();
    let occupancy = Occupancy::build(grid, &rects);
    rects
        .iter()
        .map(|rect| rect.in_bounds(grid) && !occupancy.is_contested(rect))
        .collect()
}

/// Fresh copies of `items` paired with their validity.
#[must_use]
pub fn with_validity(items: &[PlacedItem], grid: Grid) -> Vec<PlacedItemWithValidity> {
    items
        .iter()
        .zip(evaluate(items, grid))
        .map(|(item, is_valid)| PlacedItemWithValidity { item: item.clone(), is_valid })
        .collect()
}
