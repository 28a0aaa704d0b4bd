use film_map::App;
use leptos::*;
use wasm_bindgen::JsCast;

const ROOT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        logging::error!("Cannot initialize logger: {e}");
    }

    let root = document()
        .get_element_by_id(ROOT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => mount_to(root, App),
        None => log::error!("Cannot find element `#{ROOT_ID}`, the map will not be shown"),
    }
}
