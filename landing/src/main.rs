// Callwell Landing Page — Leptos 0.8 CSR entry point

use leptos::prelude::*;
use site::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
