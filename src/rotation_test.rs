use super::*;

// =============================================================
// Cycle
// =============================================================

#[test]
fn cw_cycle_order() {
    assert_eq!(Rotation::Deg0.cw(), Rotation::Deg90);
    assert_eq!(Rotation::Deg90.cw(), Rotation::Deg180);
    assert_eq!(Rotation::Deg180.cw(), Rotation::Deg270);
    assert_eq!(Rotation::Deg270.cw(), Rotation::Deg0);
}

#[test]
fn ccw_is_exact_reverse_of_cw() {
    for rotation in Rotation::ALL {
        assert_eq!(rotation.cw().ccw(), rotation);
        assert_eq!(rotation.ccw().cw(), rotation);
    }
}

#[test]
fn ccw_cycle_order() {
    assert_eq!(Rotation::Deg0.ccw(), Rotation::Deg270);
    assert_eq!(Rotation::Deg270.ccw(), Rotation::Deg180);
    assert_eq!(Rotation::Deg180.ccw(), Rotation::Deg90);
    assert_eq!(Rotation::Deg90.ccw(), Rotation::Deg0);
}

#[test]
fn step_follows_direction() {
    assert_eq!(Rotation::Deg90.step(RotateDirection::Cw), Rotation::Deg180);
    assert_eq!(Rotation::Deg90.step(RotateDirection::Ccw), Rotation::Deg0);
}

#[test]
fn sideways_only_for_quarter_turns() {
    assert!(!Rotation::Deg0.is_sideways());
    assert!(Rotation::Deg90.is_sideways());
    assert!(!Rotation::Deg180.is_sideways());
    assert!(Rotation::Deg270.is_sideways());
}

#[test]
fn default_is_upright() {
    assert_eq!(Rotation::default(), Rotation::Deg0);
}

// =============================================================
// Degrees
// =============================================================

#[test]
fn degrees_match_variants() {
    let degrees: Vec<i32> = Rotation::ALL.iter().map(|r| r.degrees()).collect();
    assert_eq!(degrees, vec![0, 90, 180, 270]);
}

#[test]
fn from_degrees_rejects_off_cycle_values() {
    assert_eq!(Rotation::from_degrees(180), Some(Rotation::Deg180));
    assert_eq!(Rotation::from_degrees(45), None);
    assert_eq!(Rotation::from_degrees(360), None);
    assert_eq!(Rotation::from_degrees(-90), None);
}

#[test]
fn serializes_as_degree_integer() {
    assert_eq!(serde_json::to_string(&Rotation::Deg270).unwrap(), "270");
    let back: Rotation = serde_json::from_str("90").unwrap();
    assert_eq!(back, Rotation::Deg90);
}

#[test]
fn deserialize_invalid_degrees_rejects() {
    assert!(serde_json::from_str::<Rotation>("45").is_err());
}

// =============================================================
// rotate()
// =============================================================

#[test]
fn rotate_cw_from_upright_swaps_dimensions() {
    assert_eq!(rotate(Rotation::Deg0, 1, 2, RotateDirection::Cw), (Rotation::Deg90, 2, 1));
}

#[test]
fn rotate_every_step_swaps() {
    let mut state = (Rotation::Deg0, 1, 3);
    let expected = [(Rotation::Deg90, 3, 1), (Rotation::Deg180, 1, 3), (Rotation::Deg270, 3, 1), (Rotation::Deg0, 1, 3)];
    for want in expected {
        state = rotate(state.0, state.1, state.2, RotateDirection::Cw);
        assert_eq!(state, want);
    }
}

#[test]
fn four_ccw_steps_are_identity() {
    let mut state = (Rotation::Deg180, 2, 5);
    for _ in 0..4 {
        state = rotate(state.0, state.1, state.2, RotateDirection::Ccw);
    }
    assert_eq!(state, (Rotation::Deg180, 2, 5));
}

#[test]
fn rotate_preserves_area() {
    for start in Rotation::ALL {
        let (_, w, h) = rotate(start, 2, 3, RotateDirection::Cw);
        assert_eq!(w * h, 6);
    }
}

#[test]
fn square_still_advances_rotation() {
    assert_eq!(rotate(Rotation::Deg0, 2, 2, RotateDirection::Cw), (Rotation::Deg90, 2, 2));
}
