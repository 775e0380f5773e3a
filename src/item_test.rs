use serde_json::json;

use super::*;

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_center_floors() {
    assert_eq!(Grid::new(4, 4).center(), (2, 2));
    assert_eq!(Grid::new(5, 3).center(), (2, 1));
    assert_eq!(Grid::new(1, 1).center(), (0, 0));
}

#[test]
fn grid_empty_when_any_dimension_non_positive() {
    assert!(Grid::new(0, 4).is_empty());
    assert!(Grid::new(4, -1).is_empty());
    assert!(!Grid::new(1, 1).is_empty());
}

#[test]
fn grid_max_radius_is_larger_dimension() {
    assert_eq!(Grid::new(3, 7).max_radius(), 7);
}

// =============================================================
// PlacedItem
// =============================================================

#[test]
fn new_item_is_upright_with_unique_id() {
    let a = PlacedItem::new("bin-1x2", 0, 0, 1, 2);
    let b = PlacedItem::new("bin-1x2", 0, 0, 1, 2);
    assert_eq!(a.rotation, Rotation::Deg0);
    assert!(a.customization.is_none());
    assert_ne!(a.instance_id, b.instance_id);
}

#[test]
fn rect_mirrors_geometry() {
    let item = PlacedItem::new("bin", 3, 4, 2, 1);
    assert_eq!(item.rect(), Rect::new(3, 4, 2, 1));
}

#[test]
fn rotate_cw_swaps_and_advances() {
    let mut item = PlacedItem::new("bin-1x2", 0, 0, 1, 2);
    item.rotate(RotateDirection::Cw);
    assert_eq!((item.width, item.height, item.rotation), (2, 1, Rotation::Deg90));
}

#[test]
fn rotate_cw_then_ccw_restores() {
    let mut item = PlacedItem::new("bin-2x3", 1, 1, 2, 3);
    let original = item.clone();
    item.rotate(RotateDirection::Cw);
    item.rotate(RotateDirection::Ccw);
    assert_eq!(item, original);
}

#[test]
fn rotate_does_not_move() {
    let mut item = PlacedItem::new("bin-2x3", 5, 6, 2, 3);
    item.rotate(RotateDirection::Ccw);
    assert_eq!((item.x, item.y), (5, 6));
}

#[test]
fn translate_adds_delta() {
    let mut item = PlacedItem::new("bin", 2, 2, 1, 1);
    item.translate(-3, 1);
    assert_eq!((item.x, item.y), (-1, 3));
}

#[test]
fn translate_saturates() {
    let mut item = PlacedItem::new("bin", i32::MAX - 1, i32::MIN + 1, 1, 1);
    item.translate(10, -10);
    assert_eq!((item.x, item.y), (i32::MAX, i32::MIN));
}

#[test]
fn duplicate_at_keeps_shape_and_payload() {
    let mut item = PlacedItem::new("bin-1x3", 0, 0, 1, 3);
    item.rotate(RotateDirection::Cw);
    item.customization = Some(json!({"label": "screws"}));
    let copy = item.duplicate_at(4, 2);
    assert_ne!(copy.instance_id, item.instance_id);
    assert_eq!((copy.x, copy.y), (4, 2));
    assert_eq!((copy.width, copy.height, copy.rotation), (3, 1, Rotation::Deg90));
    assert_eq!(copy.item_id, "bin-1x3");
    assert_eq!(copy.customization, item.customization);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn placed_item_uses_camel_case() {
    let item = PlacedItem::new("bin-2x2", 1, 2, 2, 2);
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["itemId"], "bin-2x2");
    assert_eq!(value["rotation"], 0);
    assert!(value.get("instanceId").is_some());
    assert!(value.get("customization").is_none());
}

#[test]
fn placed_item_rotation_defaults_when_absent() {
    let json = json!({
        "instanceId": "00000000-0000-0000-0000-000000000000",
        "itemId": "bin-1x1",
        "x": 0, "y": 0, "width": 1, "height": 1
    });
    let item: PlacedItem = serde_json::from_value(json).unwrap();
    assert_eq!(item.rotation, Rotation::Deg0);
}

#[test]
fn validity_projection_flattens_item() {
    let item = PlacedItem::new("bin-1x1", 0, 0, 1, 1);
    let projected = PlacedItemWithValidity { item: item.clone(), is_valid: false };
    let value = serde_json::to_value(&projected).unwrap();
    assert_eq!(value["itemId"], "bin-1x1");
    assert_eq!(value["isValid"], false);
}
