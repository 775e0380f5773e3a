//! Rotation model: a fixed four-state cycle in 90° steps.
//!
//! Items only ever sit at 0°, 90°, 180°, or 270°. Clockwise and
//! counter-clockwise steps walk the same cycle in opposite directions. When a
//! step crosses between an upright orientation (0°/180°) and a sideways one
//! (90°/270°) the item's width and height trade places, so cell area is
//! preserved and four steps in one direction are a net identity.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use serde::{Deserialize, Serialize};

use crate::input::RotateDirection;

/// Orientation of a placed item.
///
/// Serializes as its degree value (`0`, `90`, `180`, `270`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    /// Upright, as declared by the catalog.
    #[default]
    Deg0,
    /// A quarter turn clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns clockwise.
    Deg270,
}

impl Rotation {
    /// All orientations in clockwise order, starting from upright.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Parse an exact degree value. Anything outside the cycle yields `None`.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Next orientation clockwise: 0 → 90 → 180 → 270 → 0.
    #[must_use]
    pub fn cw(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// Next orientation counter-clockwise: 0 → 270 → 180 → 90 → 0.
    #[must_use]
    pub fn ccw(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg270,
            Self::Deg270 => Self::Deg180,
            Self::Deg180 => Self::Deg90,
            Self::Deg90 => Self::Deg0,
        }
    }

    /// Step once in `direction`.
    #[must_use]
    pub fn step(self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Cw => self.cw(),
            RotateDirection::Ccw => self.ccw(),
        }
    }

    /// Whether the item lies on its side (90° or 270°).
    #[must_use]
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<i32> for Rotation {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees).ok_or_else(|| format!("invalid rotation: {degrees} (expected 0, 90, 180 or 270)"))
    }
}

/// Rotate a `(rotation, width, height)` triple one step in `direction`.
///
/// Width and height swap exactly when the step changes sideways parity.
#[must_use]
pub fn rotate(rotation: Rotation, width: i32, height: i32, direction: RotateDirection) -> (Rotation, i32, i32) {
    let next = rotation.step(direction);
    if next.is_sideways() == rotation.is_sideways() {
        (next, width, height)
    } else {
        (next, height, width)
    }
}
