use leptos::*;

use places_app::{config, App};

fn main() {
    _ = console_log::init_with_level(config::log_level());
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(|| view! { <App /> });
}
