#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn planet(kind: &str) -> Planet {
    Planet {
        id: Uuid::new_v4(),
        name: "Testplanet".to_owned(),
        kind: kind.to_owned(),
        texture: None,
    }
}

fn base_at(coords: &str) -> Base {
    Base { name: "Base".to_owned(), coordinates: Some(coords.to_owned()) }
}

fn has_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn has_texture_invalidated(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::TextureInvalidated))
}

fn has_cursor(actions: &[Action], style: &str) -> bool {
    actions.iter().any(|a| matches!(a, Action::SetCursor(s) if s == style))
}

// --- Data inputs ---

#[test]
fn set_planet_invalidates_the_texture() {
    let mut core = MapCore::new();
    let actions = core.set_planet(planet("Toxique"));
    assert!(has_texture_invalidated(&actions));
    assert!(has_render(&actions));
    assert!(core.planet.is_some());
}

#[test]
fn set_records_requests_a_render() {
    let mut core = MapCore::new();
    assert!(has_render(&core.set_bases(vec![base_at("1, 2")])));
    assert!(has_render(&core.set_pois(Vec::new())));
    assert_eq!(core.bases.len(), 1);
}

#[test]
fn set_viewport_same_size_is_a_noop() {
    let mut core = MapCore::new();
    let actions = core.set_viewport(core.viewport_w, core.viewport_h);
    assert!(actions.is_empty());
}

#[test]
fn set_viewport_resize_invalidates_the_texture() {
    let mut core = MapCore::new();
    let actions = core.set_viewport(1920.0, 1080.0);
    assert!(has_texture_invalidated(&actions));
    assert!(has_render(&actions));
    assert_eq!(core.viewport_w, 1920.0);
    assert_eq!(core.viewport_h, 1080.0);
}

// --- View controls ---

#[test]
fn zoom_in_zooms_toward_the_viewport_center() {
    let mut core = MapCore::new();
    let actions = core.zoom_in();
    assert!(has_render(&actions));
    assert!(approx_eq(core.camera.zoom, 1.5));
    // The center (800, 400) stays fixed.
    assert!(approx_eq(core.camera.offset_x, -400.0));
    assert!(approx_eq(core.camera.offset_y, -200.0));
}

#[test]
fn zoom_out_inverts_zoom_in() {
    let mut core = MapCore::new();
    core.zoom_in();
    core.zoom_out();
    assert!(approx_eq(core.camera.zoom, 1.0));
    assert!(approx_eq(core.camera.offset_x, 0.0));
    assert!(approx_eq(core.camera.offset_y, 0.0));
}

#[test]
fn zoom_buttons_respect_the_bounds() {
    let mut core = MapCore::new();
    for _ in 0..20 {
        core.zoom_in();
    }
    assert_eq!(core.camera.zoom, crate::consts::MAX_ZOOM);
    for _ in 0..40 {
        core.zoom_out();
    }
    assert_eq!(core.camera.zoom, crate::consts::MIN_ZOOM);
}

#[test]
fn reset_view_restores_the_identity_camera() {
    let mut core = MapCore::new();
    core.zoom_in();
    core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary);
    core.on_pointer_move(Point::new(90.0, 60.0));
    let actions = core.reset_view();
    assert!(has_render(&actions));
    assert!(approx_eq(core.camera.zoom, 1.0));
    assert!(approx_eq(core.camera.offset_x, 0.0));
    assert!(approx_eq(core.camera.offset_y, 0.0));
}

// --- Wheel zoom ---

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    let mut core = MapCore::new();
    let at = Point::new(100.0, 100.0);
    assert!(has_render(&core.on_wheel(at, WheelDelta { dx: 0.0, dy: -1.0 })));
    assert!(approx_eq(core.camera.zoom, WHEEL_ZOOM_IN));

    let mut core = MapCore::new();
    assert!(has_render(&core.on_wheel(at, WheelDelta { dx: 0.0, dy: 1.0 })));
    assert!(approx_eq(core.camera.zoom, WHEEL_ZOOM_OUT));
}

#[test]
fn horizontal_scroll_does_nothing() {
    let mut core = MapCore::new();
    let actions = core.on_wheel(Point::new(100.0, 100.0), WheelDelta { dx: 5.0, dy: 0.0 });
    assert!(actions.is_empty());
    assert!(approx_eq(core.camera.zoom, 1.0));
}

#[test]
fn wheel_zoom_anchors_at_the_cursor() {
    let mut core = MapCore::new();
    let at = Point::new(321.0, 654.0);
    let world_before = core.camera.screen_to_world(at);
    core.on_wheel(at, WheelDelta { dx: 0.0, dy: -1.0 });
    let world_after = core.camera.screen_to_world(at);
    assert!(approx_eq(world_before.x, world_after.x));
    assert!(approx_eq(world_before.y, world_after.y));
}

// --- Pan gesture ---

#[test]
fn primary_button_starts_a_pan() {
    let mut core = MapCore::new();
    let actions = core.on_pointer_down(Point::new(100.0, 50.0), Button::Primary);
    assert!(has_cursor(&actions, "grabbing"));
    assert_eq!(core.input, InputState::Panning { grab: Point::new(100.0, 50.0) });
}

#[test]
fn other_buttons_are_ignored() {
    let mut core = MapCore::new();
    assert!(core.on_pointer_down(Point::new(0.0, 0.0), Button::Middle).is_empty());
    assert!(core.on_pointer_down(Point::new(0.0, 0.0), Button::Secondary).is_empty());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn dragging_moves_the_camera_offset() {
    let mut core = MapCore::new();
    core.on_pointer_down(Point::new(100.0, 50.0), Button::Primary);
    let actions = core.on_pointer_move(Point::new(150.0, 80.0));
    assert!(has_render(&actions));
    assert!(approx_eq(core.camera.offset_x, 50.0));
    assert!(approx_eq(core.camera.offset_y, 30.0));
}

#[test]
fn dragging_keeps_the_grabbed_world_point_under_the_cursor() {
    let mut core = MapCore::new();
    core.zoom_in();
    let start = Point::new(200.0, 300.0);
    let grabbed = core.camera.screen_to_world(start);
    core.on_pointer_down(start, Button::Primary);
    let end = Point::new(450.0, 120.0);
    core.on_pointer_move(end);
    let under_cursor = core.camera.screen_to_world(end);
    assert!(approx_eq(under_cursor.x, grabbed.x));
    assert!(approx_eq(under_cursor.y, grabbed.y));
}

#[test]
fn pointer_up_ends_the_pan() {
    let mut core = MapCore::new();
    core.on_pointer_down(Point::new(100.0, 50.0), Button::Primary);
    let actions = core.on_pointer_up(Button::Primary);
    assert!(has_cursor(&actions, "crosshair"));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn pointer_up_while_idle_is_a_noop() {
    let mut core = MapCore::new();
    assert!(core.on_pointer_up(Button::Primary).is_empty());
    assert!(core.on_pointer_up(Button::Secondary).is_empty());
}

// --- Cursor readout ---

#[test]
fn moving_over_the_map_updates_the_readout() {
    let mut core = MapCore::new();
    let actions = core.on_pointer_move(Point::new(800.0, 400.0));
    assert!(has_render(&actions));
    assert_eq!(core.cursor_geo, Some(GeoCoordinate::new(0.0, 0.0)));
}

#[test]
fn unchanged_readout_requests_nothing() {
    let mut core = MapCore::new();
    core.on_pointer_move(Point::new(800.0, 400.0));
    let actions = core.on_pointer_move(Point::new(800.0, 400.0));
    assert!(actions.is_empty());
}

#[test]
fn pointer_off_the_map_has_no_readout() {
    let mut core = MapCore::new();
    // Zoomed out past 1:1 the map no longer covers the whole canvas.
    core.zoom_out();
    let actions = core.on_pointer_move(Point::new(0.0, 0.0));
    assert!(actions.is_empty());
    assert_eq!(core.cursor_geo, None);
}

#[test]
fn leaving_the_canvas_clears_the_readout() {
    let mut core = MapCore::new();
    core.on_pointer_move(Point::new(800.0, 400.0));
    let actions = core.on_pointer_leave();
    assert!(has_render(&actions));
    assert_eq!(core.cursor_geo, None);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn leaving_mid_pan_also_resets_the_cursor_style() {
    let mut core = MapCore::new();
    core.on_pointer_down(Point::new(100.0, 50.0), Button::Primary);
    let actions = core.on_pointer_leave();
    assert!(has_cursor(&actions, "crosshair"));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn leave_with_nothing_tracked_is_a_noop() {
    let mut core = MapCore::new();
    assert!(core.on_pointer_leave().is_empty());
}
