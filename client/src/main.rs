//! Browser entry point. Trunk builds this binary for `wasm32-unknown-unknown`
//! and mounts the application into `<body>`.

use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| leptos::view! { <App/> });
}
