//! Client-side entry point: logging, panic reporting, and mount.

use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("console logger installed twice");
    leptos::mount::mount_to_body(App);
}
