//! Collision and bounds primitives plus the spiral free-position search.
//!
//! Rectangles are axis-aligned and measured in whole grid cells. Two
//! rectangles collide only when their interiors overlap; sharing an edge or a
//! corner is fine. Edges are computed in `i64` so a rectangle parked near
//! `i32::MAX` reads as off-grid instead of wrapping back onto it.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::item::Grid;

/// Axis-aligned bounding box in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Same size, moved so the top-left corner sits at `(x, y)`.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Self {
        Self { x, y, ..*self }
    }

    /// Same size, shifted by a cell delta. Saturates at the `i32` limits.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        self.at(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Whether the interiors of `self` and `other` overlap. Edge contact is not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        i64::from(self.x) < other.right()
            && self.right() > i64::from(other.x)
            && i64::from(self.y) < other.bottom()
            && self.bottom() > i64::from(other.y)
    }

    /// Whether every cell of the rectangle lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, grid: Grid) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= i64::from(grid.x) && self.bottom() <= i64::from(grid.y)
    }
}

/// Whether `rect` is on the grid and clear of every rectangle in `avoid`.
#[must_use]
pub fn is_free(rect: &Rect, grid: Grid, avoid: &[Rect]) -> bool {
    rect.in_bounds(grid) && !avoid.iter().any(|other| rect.overlaps(other))
}

/// Find the nearest position at which a `width × height` rectangle fits.
///
/// The start cell is tried first, then square rings of Chebyshev radius
/// `1..=max_radius` around it. Each ring is scanned row by row along its
/// perimeter only; the interior was covered by smaller radii. Returns the
/// first free top-left corner found, or `None` once the radius is exhausted.
#[must_use]
pub fn find_free_position(
    start: (i32, i32),
    width: i32,
    height: i32,
    grid: Grid,
    avoid: &[Rect],
    max_radius: i32,
) -> Option<(i32, i32)> {
    let (sx, sy) = start;
    let footprint = Rect::new(sx, sy, width, height);
    if is_free(&footprint, grid, avoid) {
        return Some(start);
    }

    let try_at = |dx: i32, dy: i32| {
        let candidate = footprint.offset(dx, dy);
        is_free(&candidate, grid, avoid).then_some((candidate.x, candidate.y))
    };
    for radius in 1..=max_radius {
        for dy in -radius..=radius {
            let hit = if dy.abs() == radius {
                (-radius..=radius).find_map(|dx| try_at(dx, dy))
            } else {
                [-radius, radius].into_iter().find_map(|dx| try_at(dx, dy))
            };
            if hit.is_some() {
                return hit;
            }
        }
    }
    None
}
