//! Grid placement and validity engine for drawer-organizer layouts.
//!
//! The engine owns the bins a user has placed on a rectangular grid, the
//! current selection, and a clipboard. Hosts (drag/drop handlers, keyboard
//! shortcuts, context menus) call [`store::PlacementStore`] operations and
//! read back a derived list of items paired with their validity. Grid
//! dimensions and catalog lookups are supplied by the host on each call;
//! nothing here renders, persists, or talks to the network.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Placement store: items, selection, clipboard, and every mutation |
//! | [`validity`] | Occupancy-count evaluator deriving per-item validity |
//! | [`geom`] | Rectangle overlap and bounds tests, spiral free-position search |
//! | [`rotation`] | Four-state rotation cycle with width/height swap |
//! | [`item`] | Placed item, grid, and validity projection types |
//! | [`catalog`] | Library lookup seam and index loader |
//! | [`input`] | Drag payloads, selection modifiers, rotate direction |
//! | [`config`] | Engine tuning knobs with environment overrides |
//! | [`consts`] | Shared numeric constants and environment keys |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod geom;
pub mod input;
pub mod item;
pub mod rotation;
pub mod store;
pub mod validity;
