mod config;
mod controls;
mod demo;
mod element;
mod labels;
mod loader;
mod map;
mod regions;
mod render_loop;
mod tooltip;

fn main() {
    console_error_panic_hook::set_once();
    element::define("iran-map", map::mount);
    element::define("wc-blink", demo::mount_blink);
    element::define("interactive-dashboard", demo::mount_dashboard);
}
