use std::panic::{self, PanicInfo};

use leptos::{mount_to_body, view};
use research_web::app::App;

fn custom_panic_hook(info: &PanicInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

pub fn main() {
    _ = console_log::init_with_level(research_web::LOG_LEVEL);
    if cfg!(feature = "debug-assertions") {
        console_error_panic_hook::set_once();
    } else {
        panic::set_hook(Box::new(custom_panic_hook));
    }
    mount_to_body(|| view! { <App /> })
}
