use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, PointerEvent};

use iranmap_shared::interaction::HoverTracker;
use iranmap_shared::{Action, DisplayProperties, MapStore, Palette, Refresh, Scene};

use crate::config::{MIN_RENDER_SCALE, SURFACE_HEIGHT, SURFACE_WIDTH, WidgetConfig};
use crate::controls::{Legend, MetricSelector, PaletteSelector};
use crate::element::mount_in_shadow;
use crate::labels::paint_labels;
use crate::loader;
use crate::regions::paint_regions;
use crate::render_loop::{Layers, RenderScheduler};
use crate::tooltip::{Tooltip, TooltipState};

const CANVAS_STYLE: &str = "position: absolute; inset: 0; width: 100%; height: 100%;";

/// Reactive handles shared with the controls.
#[derive(Clone, Copy)]
pub struct MapState {
    /// `None` until the initial load succeeds.
    pub store: RwSignal<Option<MapStore>>,
    /// Last layers invalidated by an action.
    pub refresh: RwSignal<Refresh>,
}

impl MapState {
    /// Apply `action` once loaded. Before that it is a no-op.
    pub fn dispatch(&self, action: Action) {
        let mut refresh = None;
        self.store.update(|store| {
            if let Some(store) = store.as_mut() {
                refresh = Some(store.dispatch(action));
            }
        });
        if let Some(refresh) = refresh {
            self.refresh.set(refresh);
        }
    }
}

/// `<iran-map>` connected: read attributes and mount the widget.
pub fn mount(host: &HtmlElement) -> Result<Option<Box<dyn Any>>, String> {
    let config = match WidgetConfig::from_attributes(|name| host.get_attribute(name)) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("<iran-map>: {e}").into());
            return Ok(None);
        }
    };
    if let Some(name) = host.get_attribute("palette")
        && Palette::from_name(&name).is_none()
    {
        web_sys::console::warn_1(
            &format!("<iran-map>: unknown palette {name:?}, using {}", config.palette).into(),
        );
    }
    mount_in_shadow(host, move || view! { <IranMap config=config /> })
}

pub fn render_scale() -> f64 {
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    dpr.max(MIN_RENDER_SCALE)
}

/// Size the backing store for `scale` and return a context drawing in CSS
/// pixels.
fn context_2d(canvas: &HtmlCanvasElement, scale: f64) -> Option<CanvasRenderingContext2d> {
    let w = (SURFACE_WIDTH * scale).round() as u32;
    let h = (SURFACE_HEIGHT * scale).round() as u32;
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())?;
    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0).ok()?;
    Some(ctx)
}

/// Pointer position in surface coordinates, tolerating CSS scaling.
fn surface_point(canvas: &HtmlCanvasElement, e: &PointerEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let sx = if rect.width() > 0.0 {
        SURFACE_WIDTH / rect.width()
    } else {
        1.0
    };
    let sy = if rect.height() > 0.0 {
        SURFACE_HEIGHT / rect.height()
    } else {
        1.0
    };
    (
        (e.client_x() as f64 - rect.left()) * sx,
        (e.client_y() as f64 - rect.top()) * sy,
    )
}

/// Choropleth of the provinces: region and label canvases, controls,
/// legend and tooltip.
#[component]
pub fn IranMap(config: WidgetConfig) -> impl IntoView {
    let WidgetConfig {
        title,
        statistics,
        geo_src,
        properties_src,
        palette,
    } = config;

    let state = MapState {
        store: RwSignal::new(None),
        refresh: RwSignal::new(Refresh::default()),
    };
    provide_context(state);
    let store = state.store;
    let loaded = Memo::new(move |_| store.with(Option::is_some));

    let hovered: RwSignal<Option<usize>> = RwSignal::new(None);
    let tooltip: RwSignal<Option<TooltipState>> = RwSignal::new(None);

    let region_canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let label_canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Projected once after load; never rebuilt.
    let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
    let display: Rc<RefCell<DisplayProperties>> = Rc::new(RefCell::new(DisplayProperties::default()));
    let hover_tracker: Rc<Cell<HoverTracker>> = Rc::new(Cell::new(HoverTracker::default()));

    let scheduler = Rc::new(RenderScheduler::new({
        let scene = scene.clone();
        let display = display.clone();
        move |layers: Layers| {
            let scene = scene.borrow();
            let Some(scene) = scene.as_ref() else {
                return;
            };
            let scale = render_scale();
            store.with_untracked(|store| {
                let Some(store) = store.as_ref() else {
                    return;
                };
                let state = store.state();
                if layers.regions
                    && let Some(canvas) = region_canvas_ref.get_untracked()
                    && let Some(ctx) = context_2d(&canvas, scale)
                {
                    paint_regions(&ctx, scene, state, hovered.get_untracked());
                }
                if layers.labels
                    && let Some(canvas) = label_canvas_ref.get_untracked()
                    && let Some(ctx) = context_2d(&canvas, scale)
                {
                    paint_labels(&ctx, scene, &display.borrow(), state);
                }
            });
        }
    }));

    // Initial load: geography, then display properties, then the store.
    {
        let scene = scene.clone();
        let display = display.clone();
        let scheduler = scheduler.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let started = js_sys::Date::now();
            let fetched = match loader::load(&geo_src, &properties_src).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    web_sys::console::error_1(&format!("<iran-map>: load failed: {e}").into());
                    return;
                }
            };
            // Element detached while loading.
            if store.is_disposed() {
                return;
            }
            let map_store = match MapStore::new(statistics, palette) {
                Ok(map_store) => map_store,
                Err(e) => {
                    web_sys::console::error_1(&format!("<iran-map>: {e}").into());
                    return;
                }
            };
            let index = &map_store.state().index;
            web_sys::console::info_1(
                &format!(
                    "<iran-map>: {} regions loaded in {:.0}ms, {} label hints, metric {:?} covers {} regions",
                    fetched.features.len(),
                    js_sys::Date::now() - started,
                    fetched.display.len(),
                    map_store.selection().metric,
                    index.len()
                )
                .into(),
            );
            if index.is_empty() {
                web_sys::console::warn_1(
                    &"<iran-map>: no statistics record names a region; every region is unfilled".into(),
                );
            }
            if fetched.display.is_empty() {
                web_sys::console::warn_1(
                    &"<iran-map>: no display properties; labels use centroids and default size".into(),
                );
            }
            *scene.borrow_mut() = Some(Scene::build(&fetched.features, SURFACE_WIDTH, SURFACE_HEIGHT));
            *display.borrow_mut() = fetched.display;
            store.set(Some(map_store));
            scheduler.mark_dirty(Layers::ALL);
        });
    }

    // Actions repaint the layers they invalidated.
    Effect::new({
        let scheduler = scheduler.clone();
        move || {
            let refresh = state.refresh.get();
            scheduler.mark_dirty(refresh.into());
        }
    });

    // Hover only changes fills.
    Effect::new({
        let scheduler = scheduler.clone();
        move || {
            hovered.track();
            scheduler.mark_dirty(Layers::REGIONS);
        }
    });

    // The canvases mount after the first effect pass.
    Effect::new({
        let scheduler = scheduler.clone();
        move || {
            if region_canvas_ref.get().is_some() && label_canvas_ref.get().is_some() {
                scheduler.mark_dirty(Layers::ALL);
            }
        }
    });

    // --- Input handlers ---

    let on_pointer_move = {
        let scene = scene.clone();
        let hover_tracker = hover_tracker.clone();
        move |e: PointerEvent| {
            let Some(canvas) = region_canvas_ref.get_untracked() else {
                return;
            };
            let (x, y) = surface_point(&canvas, &e);
            let hit = scene.borrow().as_ref().and_then(|s| s.hit_test(x, y));

            let mut tracker = hover_tracker.get();
            let transition = tracker.pointer_at(hit);
            hover_tracker.set(tracker);

            let (cx, cy) = (e.client_x() as f64, e.client_y() as f64);
            if transition.is_empty() {
                if tooltip.with_untracked(Option::is_some) {
                    tooltip.update(|t| {
                        if let Some(t) = t.as_mut() {
                            t.moved_to(cx, cy);
                        }
                    });
                }
                return;
            }

            if transition.left.is_some() {
                tooltip.set(None);
                hovered.set(None);
            }
            let Some(id) = transition.entered else {
                return;
            };
            let name = scene
                .borrow()
                .as_ref()
                .and_then(|s| s.region(id))
                .and_then(|r| r.name.clone());
            let text = store.with_untracked(|store| {
                store
                    .as_ref()
                    .and_then(|s| s.tooltip_text(name.as_deref()))
            });
            // Regions without statistics get neither tooltip nor highlight.
            if let Some(text) = text {
                tooltip.set(Some(TooltipState::at_pointer(text, cx, cy)));
                hovered.set(Some(id));
            }
        }
    };

    let on_pointer_leave = {
        let hover_tracker = hover_tracker.clone();
        move |_: PointerEvent| {
            let mut tracker = hover_tracker.get();
            let transition = tracker.pointer_left();
            hover_tracker.set(tracker);
            if transition.left.is_some() {
                tooltip.set(None);
                if hovered.get_untracked().is_some() {
                    hovered.set(None);
                }
            }
        }
    };

    let surface_style = format!(
        "position: relative; width: {SURFACE_WIDTH}px; height: {SURFACE_HEIGHT}px;"
    );

    view! {
        <div class="iran-map" style="font-family: Tahoma, 'Vazirmatn', sans-serif; display: inline-block;">
            {move || {
                loaded
                    .get()
                    .then(|| title.clone())
                    .flatten()
                    .map(|t| view! { <h1 style="font-size: 1.4rem; margin: 0 0 8px;">{t}</h1> })
            }}
            <div class="controls" style="display: flex; align-items: center; margin-bottom: 8px;">
                <PaletteSelector />
                <Show when=move || loaded.get()>
                    <MetricSelector />
                </Show>
            </div>
            <div
                class="surface"
                style=surface_style
                on:pointermove=on_pointer_move
                on:pointerleave=on_pointer_leave
            >
                <canvas node_ref=region_canvas_ref style=CANVAS_STYLE />
                <canvas
                    node_ref=label_canvas_ref
                    style=format!("{CANVAS_STYLE} pointer-events: none;")
                />
            </div>
            <Show when=move || loaded.get()>
                <Legend />
            </Show>
            <Tooltip tooltip=tooltip />
        </div>
    }
}
