//! Custom element registration and per-instance mount bookkeeping.

use std::any::Any;
use std::cell::RefCell;

use leptos::mount::mount_to;
use leptos::prelude::IntoView;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Node, ShadowRoot, ShadowRootInit, ShadowRootMode};

#[wasm_bindgen(inline_js = r#"
export function define_element(name, connected, disconnected) {
    if (customElements.get(name)) {
        return;
    }
    customElements.define(name, class extends HTMLElement {
        connectedCallback() { connected(this); }
        disconnectedCallback() { disconnected(this); }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(
        name: &str,
        connected: &Closure<dyn FnMut(HtmlElement)>,
        disconnected: &Closure<dyn FnMut(HtmlElement)>,
    ) -> Result<(), JsValue>;
}

/// Builds an instance's content. `Ok(None)` means nothing needs tearing down.
pub type MountFn = fn(&HtmlElement) -> Result<Option<Box<dyn Any>>, String>;

thread_local! {
    static MOUNTS: RefCell<Vec<(HtmlElement, Box<dyn Any>)>> = const { RefCell::new(Vec::new()) };
}

pub fn define(name: &'static str, mount: MountFn) {
    let connected = Closure::<dyn FnMut(HtmlElement)>::new(move |host: HtmlElement| {
        // A reattached element starts from scratch.
        teardown(&host);
        match mount(&host) {
            Ok(Some(handle)) => MOUNTS.with(|slot| slot.borrow_mut().push((host, handle))),
            Ok(None) => {}
            Err(e) => web_sys::console::error_1(&format!("<{name}> mount failed: {e}").into()),
        }
    });
    let disconnected = Closure::<dyn FnMut(HtmlElement)>::new(|host: HtmlElement| {
        teardown(&host);
    });

    if let Err(e) = define_element(name, &connected, &disconnected) {
        web_sys::console::error_1(&format!("failed to define <{name}>: {e:?}").into());
        return;
    }
    // Callbacks live as long as the element definition, i.e. the page.
    connected.forget();
    disconnected.forget();
}

/// Drop every mount owned by `host`, disposing its effects and listeners.
fn teardown(host: &HtmlElement) {
    let host_node: &Node = host;
    let stale = MOUNTS.with(|slot| {
        let mut mounts = slot.borrow_mut();
        let (stale, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut *mounts)
            .into_iter()
            .partition(|(el, _)| el.is_same_node(Some(host_node)));
        *mounts = keep;
        stale
    });
    // Unmount outside the borrow; cleanup may touch the DOM.
    drop(stale);
}

/// The host's open shadow root, emptied.
pub fn shadow_root(host: &HtmlElement) -> Result<ShadowRoot, String> {
    let root = match host.shadow_root() {
        Some(root) => root,
        None => host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(|e| format!("attach_shadow failed: {e:?}"))?,
    };
    root.set_inner_html("");
    Ok(root)
}

/// Mount a Leptos view into a fresh container inside the host's shadow root.
pub fn mount_in_shadow<F, V>(host: &HtmlElement, view: F) -> Result<Option<Box<dyn Any>>, String>
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let root = shadow_root(host)?;
    let document = host.owner_document().ok_or("element has no document")?;
    let container = document
        .create_element("div")
        .map_err(|e| format!("create_element failed: {e:?}"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "container is not an HtmlElement".to_string())?;
    root.append_child(&container)
        .map_err(|e| format!("append_child failed: {e:?}"))?;

    let handle = mount_to(container, view);
    Ok(Some(Box::new(handle)))
}
