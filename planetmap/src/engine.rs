use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::IconCache;
use crate::camera::{Camera, Point};
use crate::consts::{
    BUTTON_ZOOM_FACTOR, MAP_HEIGHT, MAP_WIDTH, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::coords::GeoCoordinate;
use crate::input::{Button, InputState, WheelDelta};
use crate::project;
use crate::records::{Base, Planet, PointOfInterest};
use crate::render;
use crate::scene;
use crate::texture;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from engine entry points for the host to process.
///
/// The engine never draws or fetches on its own initiative: state changes
/// announce what they invalidated and the host schedules the follow-up
/// (a coalesced redraw, a cursor style change, an icon fetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// State affecting pixels changed; schedule a redraw.
    RenderNeeded,
    /// The cached terrain bitmap no longer matches its inputs.
    TextureInvalidated,
    /// Set the CSS cursor over the canvas.
    SetCursor(String),
    /// Start loading the image asset at this path, then report back via
    /// `icon_loaded` / `icon_failed`.
    IconLoadNeeded(String),
}

/// Core map state — everything that does not depend on the canvas element.
///
/// Separated from [`MapEngine`] so it can be tested without a browser.
pub struct MapCore {
    pub planet: Option<Planet>,
    pub bases: Vec<Base>,
    pub pois: Vec<PointOfInterest>,
    pub camera: Camera,
    pub input: InputState,
    /// Canvas width in pixels; also the world-space width of the map.
    pub viewport_w: f64,
    /// Canvas height in pixels; also the world-space height of the map.
    pub viewport_h: f64,
    /// Geographic position under the pointer, when it is over the map.
    pub cursor_geo: Option<GeoCoordinate>,
}

impl Default for MapCore {
    fn default() -> Self {
        Self {
            planet: None,
            bases: Vec::new(),
            pois: Vec::new(),
            camera: Camera::default(),
            input: InputState::default(),
            viewport_w: MAP_WIDTH,
            viewport_h: MAP_HEIGHT,
            cursor_geo: None,
        }
    }
}

impl MapCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the planet under display.
    pub fn set_planet(&mut self, planet: Planet) -> Vec<Action> {
        self.planet = Some(planet);
        vec![Action::TextureInvalidated, Action::RenderNeeded]
    }

    /// Replace the base list.
    pub fn set_bases(&mut self, bases: Vec<Base>) -> Vec<Action> {
        self.bases = bases;
        vec![Action::RenderNeeded]
    }

    /// Replace the point-of-interest list.
    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) -> Vec<Action> {
        self.pois = pois;
        vec![Action::RenderNeeded]
    }

    /// Resize the canvas (e.g. entering or leaving fullscreen). Width and
    /// height are redraw inputs and part of the texture key, so a real
    /// change invalidates the cached bitmap.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        if (width - self.viewport_w).abs() < f64::EPSILON
            && (height - self.viewport_h).abs() < f64::EPSILON
        {
            return Vec::new();
        }
        self.viewport_w = width;
        self.viewport_h = height;
        vec![Action::TextureInvalidated, Action::RenderNeeded]
    }

    // --- View controls ---

    /// Discrete zoom-in toward the viewport center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_at(BUTTON_ZOOM_FACTOR, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    /// Discrete zoom-out from the viewport center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_at(1.0 / BUTTON_ZOOM_FACTOR, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    /// Unconditional return to the identity view.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Continuous zoom toward the cursor.
    pub fn on_wheel(&mut self, at: Point, delta: WheelDelta) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let factor = if delta.dy < 0.0 { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
        self.camera.zoom_at(factor, at);
        vec![Action::RenderNeeded]
    }

    /// Primary button starts a pan; other buttons are ignored.
    pub fn on_pointer_down(&mut self, at: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Panning {
            grab: Point::new(at.x - self.camera.offset_x, at.y - self.camera.offset_y),
        };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Track the cursor readout and, while panning, move the camera so the
    /// world point grabbed at drag start stays under the cursor.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        let mut dirty = false;
        if let InputState::Panning { grab } = self.input {
            self.camera.offset_x = at.x - grab.x;
            self.camera.offset_y = at.y - grab.y;
            dirty = true;
        }
        let readout = self.cursor_readout(at);
        if readout != self.cursor_geo {
            self.cursor_geo = readout;
            dirty = true;
        }
        if dirty { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// End the pan gesture.
    pub fn on_pointer_up(&mut self, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("crosshair".to_owned())]
    }

    /// Pointer left the canvas: end any pan and drop the readout.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let was_panning = self.input != InputState::Idle;
        self.input = InputState::Idle;
        let had_readout = self.cursor_geo.take().is_some();
        let mut actions = Vec::new();
        if was_panning {
            actions.push(Action::SetCursor("crosshair".to_owned()));
        }
        if had_readout {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Queries ---

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport_w * 0.5, self.viewport_h * 0.5)
    }

    /// Geographic position under a screen point, if it lies over the map.
    fn cursor_readout(&self, screen: Point) -> Option<GeoCoordinate> {
        let world = self.camera.screen_to_world(screen);
        let on_map = (0.0..=self.viewport_w).contains(&world.x)
            && (0.0..=self.viewport_h).contains(&world.y);
        on_map.then(|| project::to_geo(world, self.viewport_w, self.viewport_h))
    }
}

/// The cached terrain bitmap plus the inputs it was generated from.
struct TextureBitmap {
    planet_id: Uuid,
    key: &'static str,
    width: u32,
    height: u32,
    bitmap: HtmlCanvasElement,
}

/// The full map engine. Wraps [`MapCore`] and owns the browser canvas, the
/// offscreen terrain bitmap, and the icon image cache.
pub struct MapEngine {
    canvas: HtmlCanvasElement,
    pub core: MapCore,
    icons: IconCache<HtmlImageElement>,
    texture: Option<TextureBitmap>,
}

impl MapEngine {
    /// Create a new engine bound to the given canvas element, sizing it to
    /// the default map resolution.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = MapCore::new();
        sync_canvas_size(&canvas, core.viewport_w, core.viewport_h);
        Self { canvas, core, icons: IconCache::new(), texture: None }
    }

    /// The canvas element this engine draws into.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Delegated state changes ---

    pub fn set_planet(&mut self, planet: Planet) -> Vec<Action> {
        let actions = self.core.set_planet(planet);
        self.absorb(actions)
    }

    pub fn set_bases(&mut self, bases: Vec<Base>) -> Vec<Action> {
        self.core.set_bases(bases)
    }

    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) -> Vec<Action> {
        self.core.set_pois(pois)
    }

    /// Resize the backing canvas and the map world with it.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width, height);
        if !actions.is_empty() {
            sync_canvas_size(&self.canvas, self.core.viewport_w, self.core.viewport_h);
        }
        self.absorb(actions)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.core.reset_view()
    }

    pub fn on_wheel(&mut self, at: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(at, delta)
    }

    pub fn on_pointer_down(&mut self, at: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(at, button)
    }

    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        self.core.on_pointer_move(at)
    }

    pub fn on_pointer_up(&mut self, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Icon cache feedback ---

    /// Record a settled icon load. The host schedules the follow-up redraw.
    pub fn icon_loaded(&mut self, path: &str, image: HtmlImageElement) {
        self.icons.resolve(path, image);
    }

    /// Record a failed icon load; affected markers keep their glyph.
    pub fn icon_failed(&mut self, path: &str) {
        self.icons.fail(path);
    }

    // --- Render ---

    /// Repaint the whole frame from current state.
    ///
    /// Returns `IconLoadNeeded` actions for image icons referenced by a
    /// marker this frame that no fetch has been started for yet.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&mut self) -> Result<Vec<Action>, JsValue> {
        self.ensure_texture()?;
        let ctx = context_2d(&self.canvas)?;

        let plan = scene::build_scene(&self.core, &self.icons);
        let mut follow_ups = Vec::new();
        for path in &plan.icon_requests {
            if self.icons.begin(path) {
                follow_ups.push(Action::IconLoadNeeded(path.clone()));
            }
        }

        render::draw(
            &ctx,
            &plan,
            &self.core.camera,
            self.texture.as_ref().map(|t| &t.bitmap),
            &self.icons,
            self.fallback_fill(),
            self.core.viewport_w,
            self.core.viewport_h,
        )?;
        Ok(follow_ups)
    }

    /// Drop caches invalidated by a batch of actions, passing it through.
    fn absorb(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if actions.iter().any(|a| matches!(a, Action::TextureInvalidated)) {
            self.texture = None;
        }
        actions
    }

    /// Flat fill used until the terrain bitmap exists (and when no planet
    /// is loaded at all).
    fn fallback_fill(&self) -> &'static str {
        self.core
            .planet
            .as_ref()
            .map_or("#233041", |p| texture::texture_for(&p.kind, p.texture.as_deref()).color)
    }

    /// Regenerate the offscreen terrain bitmap if its key no longer matches
    /// `(planet id, texture, canvas size)`. Painting is synchronous; the
    /// bitmap is reused for every subsequent redraw.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn ensure_texture(&mut self) -> Result<(), JsValue> {
        let Some(planet) = &self.core.planet else {
            return Ok(());
        };
        let style = texture::texture_for(&planet.kind, planet.texture.as_deref());
        let width = self.core.viewport_w as u32;
        let height = self.core.viewport_h as u32;

        let current = self.texture.as_ref().is_some_and(|t| {
            t.planet_id == planet.id && t.key == style.key && t.width == width && t.height == height
        });
        if current {
            return Ok(());
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let bitmap: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        bitmap.set_width(width);
        bitmap.set_height(height);
        texture::paint(&context_2d(&bitmap)?, style, f64::from(width), f64::from(height))?;

        self.texture = Some(TextureBitmap {
            planet_id: planet.id,
            key: style.key,
            width,
            height,
            bitmap,
        });
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sync_canvas_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Fetch the 2d context of a canvas.
fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("unexpected rendering context type"))
}
