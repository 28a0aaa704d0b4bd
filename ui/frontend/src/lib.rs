use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod components;
mod explorer;
mod leaflet_map;
mod loader;
mod pages;

use crate::pages::home::Home;

pub use crate::{
    components::{info_window::info_window, search_box::SearchBox},
    explorer::Explorer,
    leaflet_map::LeafletSurface,
    loader::load_dataset,
    pages::home::page_settings,
};

/// Shows a blocking browser alert.
pub fn alert_user(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("Cannot show alert `{message}`: {e:?}");
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-bkg-1 fixed w-full z-20 top-0 start-0 border-b border-bkg-2">
            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <a href="/" class="flex">
                    <span class="self-center text-2xl font-semibold whitespace-nowrap text-content-1">SF Film Locations</span>
                </a>
            </div>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html/>
        <Title text="San Francisco Film Locations"/>

        <Meta charset="UTF-8"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <div class="bg-bkg-2">
            <Navbar/>
            <Router>
                <main class="pt-[4rem]">
                    <Routes>
                        <Route path="" view=Home/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
