use leptos::prelude::*;
use wasm_bindgen::JsCast;

use iranmap_shared::{Action, Palette};

use crate::map::MapState;

const CONTROL_STYLE: &str = "background: #fff; border: 1px solid #bbb; border-radius: 4px; padding: 4px 10px; font-size: 0.85rem; cursor: pointer;";
const DROPDOWN_STYLE: &str = "position: absolute; top: 100%; left: 0; z-index: 5; background: #fff; border: 1px solid #bbb; border-radius: 4px; max-height: 320px; overflow-y: auto; font-size: 0.8rem;";

/// Toggle button plus the dropdown of palettes, each shown as its gradient.
#[component]
pub fn PaletteSelector() -> impl IntoView {
    let state: MapState = expect_context();
    let open = RwSignal::new(false);

    let button_label = Memo::new(move |_| {
        state.store.with(|store| match store {
            Some(store) => format!("Selected: {}", store.selection().palette),
            None => "Select Palette".to_string(),
        })
    });

    let items = Palette::ALL
        .into_iter()
        .map(|palette| {
            let swatch = format!(
                "display: inline-block; width: 120px; height: 12px; margin-right: 8px; vertical-align: middle; background: {};",
                palette.gradient_css()
            );
            view! {
                <div
                    class="palette-item"
                    style="display: flex; align-items: center; padding: 3px 8px; cursor: pointer; white-space: nowrap;"
                    on:click=move |_| {
                        state.dispatch(Action::SelectPalette(palette));
                        open.set(false);
                    }
                >
                    <span style=swatch />
                    <span>{palette.name()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="palette-selector" style="position: relative; display: inline-block;">
            <button style=CONTROL_STYLE on:click=move |_| open.update(|o| *o = !*o)>
                {move || button_label.get()}
            </button>
            <div
                class="palette-dropdown"
                style=move || {
                    let display = if open.get() { "block" } else { "none" };
                    format!("{DROPDOWN_STYLE} display: {display};")
                }
            >
                {items}
            </div>
        </div>
    }
}

/// `<select>` over every statistics field except the region key.
#[component]
pub fn MetricSelector() -> impl IntoView {
    let state: MapState = expect_context();

    let metrics = Memo::new(move |_| {
        state.store.with(|store| {
            store
                .as_ref()
                .map(|s| {
                    s.statistics()
                        .metric_names()
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let selected = Memo::new(move |_| {
        state
            .store
            .with(|store| store.as_ref().map(|s| s.selection().metric.clone()))
    });

    let on_change = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        state.dispatch(Action::SelectMetric(select.value()));
    };

    view! {
        <label class="metric-selector" style="font-size: 0.85rem; margin-inline-start: 12px;">
            "نوع داده: "
            <select style=CONTROL_STYLE on:change=on_change>
                {move || {
                    metrics
                        .get()
                        .into_iter()
                        .map(|metric| {
                            let value = metric.clone();
                            let is_selected = selected.get().as_deref() == Some(metric.as_str());
                            view! {
                                <option value=value selected=is_selected>
                                    {metric}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Gradient of the active palette with low/high captions. Repaints only
/// when an action invalidates the legend.
#[component]
pub fn Legend() -> impl IntoView {
    let state: MapState = expect_context();
    let gradient = Memo::new(move |prev: Option<&String>| {
        let refresh = state.refresh.get();
        match prev {
            Some(prev) if !refresh.legend => prev.clone(),
            _ => state.store.with_untracked(|store| {
                store
                    .as_ref()
                    .map(|s| s.selection().palette)
                    .unwrap_or_default()
                    .gradient_css()
            }),
        }
    });

    view! {
        <div class="legend" style="width: 240px; margin-top: 8px; font-size: 0.8rem;">
            <div
                class="legend-swatch"
                style=move || format!("height: 14px; border: 1px solid #999; background: {};", gradient.get())
            />
            <div style="display: flex; justify-content: space-between;">
                <span>"کم"</span>
                <span>"زیاد"</span>
            </div>
        </div>
    }
}
