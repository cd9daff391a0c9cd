//! The two small demo elements: `<wc-blink>` and `<interactive-dashboard>`.

use std::any::Any;

use leptos::prelude::*;
use web_sys::HtmlElement;

use iranmap_shared::dashboard::{EMPTY_MESSAGE, Tab, Table, WELCOME_MESSAGE};

use crate::config::DashboardConfig;
use crate::element::{mount_in_shadow, shadow_root};

const BLINK_TEMPLATE: &str = r#"<style>
@keyframes blink { 0%, 100% { opacity: 1; } 50% { opacity: 0; } }
.blink { animation: blink 2s infinite; }
</style><span class="blink"><slot></slot></span>"#;

/// `<wc-blink>`: static shadow DOM, nothing to tear down.
pub fn mount_blink(host: &HtmlElement) -> Result<Option<Box<dyn Any>>, String> {
    shadow_root(host)?.set_inner_html(BLINK_TEMPLATE);
    Ok(None)
}

pub fn mount_dashboard(host: &HtmlElement) -> Result<Option<Box<dyn Any>>, String> {
    let config = DashboardConfig::from_attributes(|name| host.get_attribute(name));
    if config.table.is_none() && host.has_attribute("data") {
        web_sys::console::warn_1(&"<interactive-dashboard>: data is not a non-empty JSON array".into());
    }
    mount_in_shadow(host, move || view! { <Dashboard config=config /> })
}

#[component]
fn Dashboard(config: DashboardConfig) -> impl IntoView {
    let DashboardConfig { title, table } = config;
    let active = RwSignal::new(Tab::default());

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    style=move || {
                        let weight = if active.get() == tab { "bold" } else { "normal" };
                        format!("padding: 4px 12px; margin-right: 4px; cursor: pointer; font-weight: {weight};")
                    }
                    on:click=move |_| active.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let details = match table {
        Some(table) => render_table(table).into_any(),
        None => view! { <p>{EMPTY_MESSAGE}</p> }.into_any(),
    };

    view! {
        <div class="dashboard" style="font-family: system-ui, sans-serif; border: 1px solid #ccc; border-radius: 6px; padding: 12px;">
            <h2 style="margin: 0 0 8px;">{title}</h2>
            <div class="tabs" style="margin-bottom: 8px;">{tabs}</div>
            <div
                class="tab-content"
                style=move || if active.get() == Tab::Overview { "display: block;" } else { "display: none;" }
            >
                <h3 style="margin: 0 0 8px;">{Tab::Overview.heading()}</h3>
                <p>{WELCOME_MESSAGE}</p>
            </div>
            <div
                class="tab-content"
                style=move || if active.get() == Tab::Details { "display: block;" } else { "display: none;" }
            >
                <h3 style="margin: 0 0 8px;">{Tab::Details.heading()}</h3>
                {details}
            </div>
        </div>
    }
}

fn render_table(table: Table) -> impl IntoView {
    let Table { headers, rows } = table;
    let header_cells = headers
        .into_iter()
        .map(|h| view! { <th style="border: 1px solid #ccc; padding: 4px 8px; text-align: left;">{h}</th> })
        .collect::<Vec<_>>();
    let body = rows
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .map(|cell| view! { <td style="border: 1px solid #ccc; padding: 4px 8px;">{cell}</td> })
                .collect::<Vec<_>>();
            view! { <tr>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table style="border-collapse: collapse;">
            <thead>
                <tr>{header_cells}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
