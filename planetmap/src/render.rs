//! Rendering: executes a draw plan against a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`] during a frame. It receives the
//! immutable [`ScenePlan`] plus read-only camera/cache state and produces
//! pixels — it does not mutate any application state.
//!
//! World-space ops ride the camera transform set up once per frame; labels
//! and the cursor readout temporarily reset to screen space so they stay
//! legible at any zoom. Markers compensate the camera scale with its inverse
//! so a pin occupies the same screen pixels at 0.5× and at 50×.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::IconCache;
use crate::camera::{Camera, Point};
use crate::consts::{
    MARKER_FONT_PX, MARKER_ICON_PX, MARKER_LABEL_FONT_PX, MARKER_LABEL_OFFSET_PX,
    MARKER_RADIUS_PX,
};
use crate::icons;
use crate::scene::{DrawOp, MarkerIcon, ScenePlan};

const GRID_COLOR: &str = "rgba(255, 255, 255, 0.15)";
const GRID_LABEL_COLOR: &str = "rgba(255, 255, 255, 0.7)";
const GRID_LABEL_FONT: &str = "10px sans-serif";
const LABEL_HALO: &str = "rgba(0, 0, 0, 0.8)";
const READOUT_BG: &str = "rgba(10, 16, 24, 0.75)";
const READOUT_COLOR: &str = "#00d9ff";
const READOUT_FONT: &str = "12px monospace";

/// Execute a draw plan. Clears the canvas and repaints every op in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
#[allow(clippy::too_many_arguments)]
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    plan: &ScenePlan,
    camera: &Camera,
    texture: Option<&HtmlCanvasElement>,
    icons: &IconCache<HtmlImageElement>,
    fallback_fill: &str,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    // Clear in screen space, then mount the camera transform.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.offset_x, camera.offset_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    for op in &plan.ops {
        match op {
            DrawOp::Background => {
                draw_background(ctx, texture, fallback_fill, viewport_w, viewport_h)?;
            }
            DrawOp::GridLine { from, to } => draw_grid_line(ctx, camera, *from, *to),
            DrawOp::GridLabel { text, at } => {
                in_screen_space(ctx, |ctx| draw_grid_label(ctx, text, *at))?;
            }
            DrawOp::Marker { world, icon, label, accent } => {
                draw_marker(ctx, camera, *world, icon, icons, label, accent)?;
            }
            DrawOp::CursorReadout { text } => {
                in_screen_space(ctx, |ctx| draw_readout(ctx, text, viewport_h))?;
            }
        }
    }
    Ok(())
}

/// Blit the cached terrain bitmap, or flat-fill the world rect while the
/// bitmap does not exist yet.
fn draw_background(
    ctx: &CanvasRenderingContext2d,
    texture: Option<&HtmlCanvasElement>,
    fallback_fill: &str,
    world_w: f64,
    world_h: f64,
) -> Result<(), JsValue> {
    if let Some(bitmap) = texture {
        ctx.draw_image_with_html_canvas_element(bitmap, 0.0, 0.0)?;
    } else {
        ctx.set_fill_style_str(fallback_fill);
        ctx.fill_rect(0.0, 0.0, world_w, world_h);
    }
    Ok(())
}

/// A world-space grid line with screen-constant stroke width.
fn draw_grid_line(ctx: &CanvasRenderingContext2d, camera: &Camera, from: Point, to: Point) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(camera.screen_dist_to_world(1.0));
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

fn draw_grid_label(ctx: &CanvasRenderingContext2d, text: &str, at: Point) -> Result<(), JsValue> {
    ctx.set_font(GRID_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(GRID_LABEL_COLOR);
    ctx.fill_text(text, at.x, at.y)
}

/// A marker pin at a world position, drawn at constant screen size by
/// undoing the camera scale around the marker's own origin.
fn draw_marker(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    world: Point,
    icon: &MarkerIcon,
    icons: &IconCache<HtmlImageElement>,
    label: &str,
    accent: &str,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(world.x, world.y)?;
    let inv = camera.screen_dist_to_world(1.0);
    ctx.scale(inv, inv)?;

    // Pin disc with a drop shadow.
    ctx.set_shadow_color("rgba(0, 0, 0, 0.5)");
    ctx.set_shadow_blur(5.0);
    ctx.set_shadow_offset_y(2.0);
    ctx.set_fill_style_str(accent);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.set_shadow_color("transparent");

    match icon {
        MarkerIcon::Glyph(glyph) => draw_glyph(ctx, glyph)?,
        MarkerIcon::Image(path) => match icons.get(path) {
            Some(image) => {
                let half = MARKER_ICON_PX / 2.0;
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    -half,
                    -half,
                    MARKER_ICON_PX,
                    MARKER_ICON_PX,
                )?;
            }
            // The plan only names loaded images, but the glyph is a safe out.
            None => draw_glyph(ctx, icons::DEFAULT_GLYPH)?,
        },
    }

    if !label.is_empty() {
        ctx.set_font(&format!("bold {MARKER_LABEL_FONT_PX}px Arial"));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_stroke_style_str(LABEL_HALO);
        ctx.set_line_width(3.0);
        ctx.stroke_text(label, 0.0, MARKER_LABEL_OFFSET_PX)?;
        ctx.set_fill_style_str("#ffffff");
        ctx.fill_text(label, 0.0, MARKER_LABEL_OFFSET_PX)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_glyph(ctx: &CanvasRenderingContext2d, glyph: &str) -> Result<(), JsValue> {
    ctx.set_font(&format!("{MARKER_FONT_PX}px Arial"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(glyph, 0.0, 0.0)
}

/// Floating cursor-coordinate box pinned to the bottom-left corner.
#[allow(clippy::cast_precision_loss)]
fn draw_readout(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    viewport_h: f64,
) -> Result<(), JsValue> {
    let (x, h) = (10.0, 24.0);
    let y = viewport_h - h - 10.0;
    let w = 16.0 + 8.0 * text.len() as f64;

    ctx.set_fill_style_str(READOUT_BG);
    ctx.fill_rect(x, y, w, h);
    ctx.set_font(READOUT_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(READOUT_COLOR);
    ctx.fill_text(text, x + 8.0, y + h / 2.0)
}

/// Run `f` with the transform reset to identity, restoring the camera
/// transform afterwards.
fn in_screen_space<F>(ctx: &CanvasRenderingContext2d, f: F) -> Result<(), JsValue>
where
    F: FnOnce(&CanvasRenderingContext2d) -> Result<(), JsValue>,
{
    ctx.save();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    let result = f(ctx);
    ctx.restore();
    result
}
