//! Input model: drag payloads, selection modifiers, and rotate direction.
//!
//! These are the shapes in which host event handlers describe user intent.
//! Pointer-to-cell translation already happened upstream; every coordinate
//! that arrives here is in grid-cell space.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::item::InstanceId;

/// Keyboard modifier keys held during a selection click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held: extend the selection.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held: toggle membership.
    #[serde(default)]
    pub ctrl: bool,
    /// Meta / Command key is held: treated like Ctrl.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl only.
    #[must_use]
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Shift only.
    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Whether the click toggles membership rather than extending or replacing.
    #[must_use]
    pub fn toggles(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Direction of a quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotateDirection {
    /// Clockwise (the default for keyboard and context-menu rotation).
    #[default]
    Cw,
    /// Counter-clockwise.
    Ccw,
}

/// The subject of a drop onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragData {
    /// A template dragged in from the library panel.
    Library {
        /// Catalog id of the dragged template.
        #[serde(rename = "itemId")]
        item_id: String,
    },
    /// An item already on the grid.
    Placed {
        /// Catalog id of the dragged item.
        #[serde(rename = "itemId")]
        item_id: String,
        /// Instance being dragged.
        #[serde(rename = "instanceId")]
        instance_id: InstanceId,
    },
}
