use super::*;

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn panning_holds_its_grab_point() {
    let state = InputState::Panning { grab: Point::new(12.0, 34.0) };
    match state {
        InputState::Panning { grab } => {
            assert_eq!(grab, Point::new(12.0, 34.0));
        }
        InputState::Idle => panic!("expected a panning state"),
    }
}

#[test]
fn buttons_are_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
}
