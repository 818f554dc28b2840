use splatpage_core::{Rect, SliderKey, SliderPosition};

const CONTAINER: Rect = Rect::new(40.0, 10.0, 800.0, 450.0);

#[test]
fn pointer_maps_linearly_across_container() {
    let mut x = CONTAINER.left;
    while x <= CONTAINER.right() {
        let position = SliderPosition::from_pointer(x, CONTAINER).unwrap();
        let expected = ((x - CONTAINER.left) / CONTAINER.width * 100.0).clamp(0.0, 100.0);
        assert_eq!(position.value(), expected);
        x += 12.5;
    }
}

#[test]
fn container_edges_map_to_bounds() {
    let left = SliderPosition::from_pointer(CONTAINER.left, CONTAINER).unwrap();
    let right = SliderPosition::from_pointer(CONTAINER.right(), CONTAINER).unwrap();
    assert_eq!(left.value(), 0.0);
    assert_eq!(right.value(), 100.0);
}

#[test]
fn pointer_outside_container_is_clamped() {
    let before = SliderPosition::from_pointer(CONTAINER.left - 300.0, CONTAINER).unwrap();
    let after = SliderPosition::from_pointer(CONTAINER.right() + 300.0, CONTAINER).unwrap();
    assert_eq!(before.value(), 0.0);
    assert_eq!(after.value(), 100.0);
}

#[test]
fn clip_inset_complements_position() {
    for step in 0..=40 {
        let position = SliderPosition::new(step as f64 * 2.5);
        assert_eq!(position.clip_right_inset(), 100.0 - position.value());
        assert_eq!(
            position.clip_path(),
            format!("inset(0 {}% 0 0)", 100.0 - position.value())
        );
        assert_eq!(position.marker_left(), format!("{}%", position.value()));
    }
}

#[test]
fn keyboard_steps_are_exact_and_clamped() {
    let start = SliderPosition::new(50.0);
    assert_eq!(start.apply_key(SliderKey::Decrease, 5.0).value(), 45.0);
    assert_eq!(start.apply_key(SliderKey::Increase, 5.0).value(), 55.0);
    assert_eq!(
        SliderPosition::new(2.0).apply_key(SliderKey::Decrease, 5.0).value(),
        0.0
    );
    assert_eq!(
        SliderPosition::new(97.0).apply_key(SliderKey::Increase, 5.0).value(),
        100.0
    );
    assert_eq!(start.apply_key(SliderKey::Min, 5.0).value(), 0.0);
    assert_eq!(start.apply_key(SliderKey::Max, 5.0).value(), 100.0);
}

#[test]
fn key_names_follow_dom_key_values() {
    assert_eq!(SliderKey::from_key("ArrowLeft"), Some(SliderKey::Decrease));
    assert_eq!(SliderKey::from_key("ArrowRight"), Some(SliderKey::Increase));
    assert_eq!(SliderKey::from_key("Home"), Some(SliderKey::Min));
    assert_eq!(SliderKey::from_key("End"), Some(SliderKey::Max));
}

#[test]
fn aria_value_rounds_to_nearest() {
    assert_eq!(SliderPosition::new(49.4).aria_value(), 49);
    assert_eq!(SliderPosition::new(49.5).aria_value(), 50);
    assert_eq!(SliderPosition::new(0.0).aria_value(), 0);
    assert_eq!(SliderPosition::default().aria_value(), 50);
}
