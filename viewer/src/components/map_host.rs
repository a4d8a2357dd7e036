//! Bridge component between the Leptos UI and the imperative
//! [`MapEngine`].
//!
//! Mounts the `<canvas>`, forwards pointer and wheel events to the engine,
//! and acts on the [`Action`]s it returns: redraw requests are coalesced
//! onto a single `requestAnimationFrame` callback, cursor styles flow into
//! a signal, and icon load requests become `HtmlImageElement` fetches that
//! report back to the engine when they settle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent, PointerEvent, WheelEvent};

use planetmap::camera::Point;
use planetmap::consts::{MAP_HEIGHT, MAP_WIDTH};
use planetmap::engine::{Action, MapEngine};
use planetmap::input::{Button, WheelDelta};
use planetmap::records::MapData;

use crate::state::map_view::MapViewState;
use crate::util::{frame, fullscreen};

/// Map host — owns the engine, its render scheduling, and its icon loads.
#[component]
pub fn MapHost(data: MapData) -> impl IntoView {
    let view_state = RwSignal::new(MapViewState::default());
    let cursor = RwSignal::new("crosshair".to_owned());
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let container_ref = NodeRef::<html::Div>::new();
    let bridge = MapBridge::new(view_state, cursor);
    let planet_name = data.planet.name.clone();

    {
        let bridge = bridge.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if bridge.installed() {
                return;
            }
            bridge.install(canvas, &data);
            watch_fullscreen(&bridge);
        });
    }

    let on_pointer_down = {
        let bridge = bridge.clone();
        move |ev: PointerEvent| {
            let Some(button) = event_button(&ev) else {
                return;
            };
            bridge.with_engine(|engine| engine.on_pointer_down(event_point(&ev), button));
        }
    };
    let on_pointer_move = {
        let bridge = bridge.clone();
        move |ev: PointerEvent| {
            bridge.with_engine(|engine| engine.on_pointer_move(event_point(&ev)));
        }
    };
    let on_pointer_up = {
        let bridge = bridge.clone();
        move |ev: PointerEvent| {
            let Some(button) = event_button(&ev) else {
                return;
            };
            bridge.with_engine(|engine| engine.on_pointer_up(button));
        }
    };
    let on_pointer_leave = {
        let bridge = bridge.clone();
        move |_: PointerEvent| {
            bridge.with_engine(MapEngine::on_pointer_leave);
        }
    };
    let on_wheel = {
        let bridge = bridge.clone();
        move |ev: WheelEvent| {
            ev.prevent_default();
            let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
            bridge.with_engine(|engine| engine.on_wheel(event_point(&ev), delta));
        }
    };

    let on_zoom_in = {
        let bridge = bridge.clone();
        move |_| bridge.with_engine(MapEngine::zoom_in)
    };
    let on_zoom_out = {
        let bridge = bridge.clone();
        move |_| bridge.with_engine(MapEngine::zoom_out)
    };
    let on_reset = {
        let bridge = bridge.clone();
        move |_| bridge.with_engine(MapEngine::reset_view)
    };
    let on_fullscreen = move |_| {
        if let Some(container) = container_ref.get() {
            fullscreen::toggle(&container);
        }
    };

    view! {
        <div class="map-host" node_ref=container_ref>
            <header class="map-host__toolbar">
                <span class="map-host__title">{planet_name}</span>
                <span class="map-host__zoom">
                    {move || format!("{:.0}%", view_state.get().zoom * 100.0)}
                </span>
                <span class="map-host__cursor">
                    {move || {
                        view_state.get().cursor_geo.map_or_else(String::new, |g| g.to_string())
                    }}
                </span>
                <button class="btn" title="Zoom avant" on:click=on_zoom_in>
                    "+"
                </button>
                <button class="btn" title="Zoom arrière" on:click=on_zoom_out>
                    "−"
                </button>
                <button class="btn" title="Réinitialiser la vue" on:click=on_reset>
                    "⟲"
                </button>
                <button class="btn" title="Plein écran" on:click=on_fullscreen>
                    "⛶"
                </button>
            </header>
            <canvas
                class="map-host__canvas"
                node_ref=canvas_ref
                style:cursor=move || cursor.get()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
            >
                "Votre navigateur ne supporte pas canvas."
            </canvas>
        </div>
    }
}

/// Shared handle around the engine and its host-side bookkeeping. Cloned
/// into every event handler and callback.
#[derive(Clone)]
struct MapBridge {
    engine: Rc<RefCell<Option<MapEngine>>>,
    frame_pending: Rc<Cell<bool>>,
    view: RwSignal<MapViewState>,
    cursor: RwSignal<String>,
}

impl MapBridge {
    fn new(view: RwSignal<MapViewState>, cursor: RwSignal<String>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(None)),
            frame_pending: Rc::new(Cell::new(false)),
            view,
            cursor,
        }
    }

    fn installed(&self) -> bool {
        self.engine.borrow().is_some()
    }

    /// Create the engine on the mounted canvas and feed it the payload.
    fn install(&self, canvas: HtmlCanvasElement, data: &MapData) {
        let mut engine = MapEngine::new(canvas);
        let mut actions = engine.set_planet(data.planet.clone());
        actions.extend(engine.set_bases(data.bases.clone()));
        actions.extend(engine.set_pois(data.pois.clone()));
        *self.engine.borrow_mut() = Some(engine);
        self.process(actions);
    }

    /// Run an engine entry point and process the actions it returns.
    fn with_engine(&self, f: impl FnOnce(&mut MapEngine) -> Vec<Action>) {
        let actions = {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            f(engine)
        };
        self.process(actions);
    }

    fn process(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::RenderNeeded => self.schedule_render(),
                // The engine drops its own bitmap; nothing to do host-side.
                Action::TextureInvalidated => {}
                Action::SetCursor(style) => self.cursor.set(style),
                Action::IconLoadNeeded(path) => self.load_icon(path),
            }
        }
    }

    /// Coalesce any number of redraw requests into one animation frame.
    fn schedule_render(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        let bridge = self.clone();
        frame::request(move || {
            bridge.frame_pending.set(false);
            bridge.render_now();
        });
    }

    fn render_now(&self) {
        let outcome = {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            engine.render()
        };
        match outcome {
            Ok(follow_ups) => {
                self.sync_view();
                self.process(follow_ups);
            }
            Err(err) => log::error!("map render failed: {err:?}"),
        }
    }

    /// Mirror engine telemetry into the toolbar signal.
    fn sync_view(&self) {
        if let Some(engine) = self.engine.borrow().as_ref() {
            self.view.set(MapViewState {
                cursor_geo: engine.core.cursor_geo,
                zoom: engine.core.camera.zoom,
            });
        }
    }

    /// Start fetching an icon image. Success and failure both report back to
    /// the engine and trigger a redraw; a failed icon keeps its glyph.
    fn load_icon(&self, path: String) {
        let Ok(image) = HtmlImageElement::new() else {
            log::warn!("icon element creation failed for {path}");
            self.icon_settled(&path, None);
            return;
        };
        let onload = Closure::once_into_js({
            let bridge = self.clone();
            let image = image.clone();
            let path = path.clone();
            move || bridge.icon_settled(&path, Some(image))
        });
        let onerror = Closure::once_into_js({
            let bridge = self.clone();
            let path = path.clone();
            move || {
                log::warn!("icon failed to load: {path}");
                bridge.icon_settled(&path, None);
            }
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
        image.set_src(&path);
    }

    fn icon_settled(&self, path: &str, image: Option<HtmlImageElement>) {
        {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            match image {
                Some(image) => engine.icon_loaded(path, image),
                None => engine.icon_failed(path),
            }
        }
        self.schedule_render();
    }

    /// Resize the map to the window in fullscreen, back to the default
    /// resolution otherwise.
    fn sync_viewport(&self) {
        let (width, height) = if fullscreen::is_active() {
            let Some(window) = web_sys::window() else {
                return;
            };
            let w = window.inner_width().ok().and_then(|v| v.as_f64());
            let h = window.inner_height().ok().and_then(|v| v.as_f64());
            match (w, h) {
                (Some(w), Some(h)) => (w, h),
                _ => return,
            }
        } else {
            (MAP_WIDTH, MAP_HEIGHT)
        };
        self.with_engine(|engine| engine.set_viewport(width, height));
    }
}

/// Follow fullscreen transitions for the lifetime of the page.
fn watch_fullscreen(bridge: &MapBridge) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new({
        let bridge = bridge.clone();
        move || bridge.sync_viewport()
    });
    if document
        .add_event_listener_with_callback("fullscreenchange", callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not watch fullscreenchange");
    }
    callback.forget();
}

fn event_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

fn event_button(ev: &MouseEvent) -> Option<Button> {
    match ev.button() {
        0 => Some(Button::Primary),
        1 => Some(Button::Middle),
        2 => Some(Button::Secondary),
        _ => None,
    }
}
