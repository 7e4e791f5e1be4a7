//! Loading indicators.

use yew::prelude::*;

/// Page-level spinner shown until the post list request settles.
#[function_component(Spinner)]
pub(crate) fn spinner() -> Html {
    html! {
        <div id="spinner" class="spinner" role="status" aria-label="Loading">
            <div class="loading" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct InlineLoadingProps {
    pub label: AttrValue,
}

/// Placeholder line for a pane whose request is in flight.
#[function_component(InlineLoading)]
pub(crate) fn inline_loading(props: &InlineLoadingProps) -> Html {
    html! { <p class="muted">{props.label.clone()}</p> }
}
