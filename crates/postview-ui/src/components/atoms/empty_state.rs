//! Message panel for panes with nothing to show yet.

use yew::prelude::*;

/// Why a pane is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyKind {
    /// A request failed; rendered as an alert.
    Error,
    /// The requested page or post does not exist.
    NotFound,
}

impl EmptyKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::NotFound => "not-found",
        }
    }

    const fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::NotFound => "status",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub kind: EmptyKind,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Action buttons or links.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let description = props
        .description
        .clone()
        .map(|text| html! { <p class="muted">{text}</p> });
    html! {
        <section class={classes!("empty-state", props.kind.class())} role={props.kind.role()}>
            <h4>{props.title.clone()}</h4>
            {description.unwrap_or_default()}
            if !props.children.is_empty() {
                <div class="empty-actions">{ for props.children.iter() }</div>
            }
        </section>
    }
}
