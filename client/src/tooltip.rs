use leptos::prelude::*;

use iranmap_shared::colors::rgba_css;
use iranmap_shared::interaction::tooltip_position;

/// Visible tooltip content and its viewport position.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    pub fn at_pointer(text: String, client_x: f64, client_y: f64) -> Self {
        let (x, y) = tooltip_position(client_x, client_y);
        Self { text, x, y }
    }

    pub fn moved_to(&mut self, client_x: f64, client_y: f64) {
        (self.x, self.y) = tooltip_position(client_x, client_y);
    }
}

#[component]
pub fn Tooltip(tooltip: RwSignal<Option<TooltipState>>) -> impl IntoView {
    let background = rgba_css(0, 0, 0, 0.75);
    view! {
        {move || {
            let Some(state) = tooltip.get() else {
                return view! { <div style="display:none;" /> }.into_any();
            };
            let style = format!(
                "position: fixed; left: {}px; top: {}px; background: {background}; color: #fff; padding: 4px 8px; border-radius: 4px; font-size: 12px; pointer-events: none; white-space: nowrap; z-index: 10;",
                state.x, state.y,
            );
            view! { <div class="tooltip" style=style>{state.text}</div> }.into_any()
        }}
    }
}
