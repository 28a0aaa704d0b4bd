use film_common::PopupContent;
use leptos::{html::Div, *};

/// Popup body for one marker. Record text is inserted as text nodes.
pub fn info_window(content: &PopupContent) -> HtmlElement<Div> {
    let rows = content
        .rows
        .iter()
        .map(|row| {
            view! {
                <p>
                    <strong>{format!("{}:", row.label)}</strong>
                    " "
                    {row.value.clone()}
                </p>
            }
        })
        .collect_view();

    view! {
        <div class="info-window">
            <h5>{content.title.clone()}</h5>
            {rows}
        </div>
    }
}
