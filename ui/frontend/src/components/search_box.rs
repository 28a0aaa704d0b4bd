use film_common::MapSurface;
use leptos::{html::Div, html::Input, *};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::explorer::Explorer;

/// Title search with the autocomplete list underneath.
#[component]
pub fn SearchBox<M: MapSurface + 'static>(explorer: Explorer<M>) -> impl IntoView {
    let input_ref = create_node_ref::<Input>();
    let list_ref = create_node_ref::<Div>();

    let outside = explorer.clone();
    let stop = use_event_listener(use_document(), ev::click, move |event| {
        let Some(input) = input_ref.get_untracked() else {
            log::error!("Search input not found, cannot handle outside clicks");
            return;
        };

        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let target = target.as_ref();

        let in_input = input.contains(target);
        let in_list = list_ref
            .get_untracked()
            .is_some_and(|list| list.contains(target));

        if !in_input && !in_list {
            outside.dismiss();
        }
    });
    on_cleanup(stop);

    let on_input = {
        let explorer = explorer.clone();
        move |ev| explorer.input(event_target_value(&ev))
    };

    let on_search = {
        let explorer = explorer.clone();
        move |_| explorer.submit()
    };

    let query = explorer.query;
    let suggestions = explorer.suggestions;
    let hidden = move || suggestions.with(Vec::is_empty);

    view! {
        <div class="search-container relative mx-auto flex max-w-xl p-2">
            <input
                type="text"
                id="search"
                placeholder="Search by movie title"
                autocomplete="off"
                node_ref=input_ref
                prop:value=query
                on:input=on_input
                class="block w-full rounded-lg border border-content-2 bg-bkg-2 text-sm text-content-1 focus:border-blue-500 focus:ring-blue-500"
            />
            <button
                type="button"
                id="searchButton"
                on:click=on_search
                class="ml-2 rounded-lg bg-blue-700 px-5 py-2.5 text-center text-sm font-medium text-bkg-2 hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300"
            >
                "Search"
            </button>
            <div
                class="autocomplete-items absolute top-full z-30 w-full rounded-lg border border-border bg-bkg-1"
                node_ref=list_ref
                style:display=move || if hidden() { "none" } else { "block" }
            >
                <For
                    each=move || suggestions.get()
                    key=|title| title.clone()
                    children=move |title: String| {
                        let explorer = explorer.clone();
                        let label = title.clone();
                        view! {
                            <div
                                class="autocomplete-item cursor-pointer px-3 py-2 text-content-1 hover:bg-gray-100"
                                on:click=move |_| explorer.select(title.clone())
                            >
                                {label}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
