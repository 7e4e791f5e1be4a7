//! Detail pane: post content, author heading, and comments.

use crate::components::atoms::{EmptyKind, EmptyState, InlineLoading};
use crate::core::logic::{SELECT_PROMPT, author_contact, comments_heading};
use crate::features::posts::actions::PostAction;
use crate::features::posts::state::{
    AuthorEntry, CommentsEntry, ListStatus, PostDetail, Remote,
};
use postview_models::Comment;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailPaneProps {
    pub status: ListStatus,
    pub detail: Option<PostDetail>,
    pub missing: bool,
    /// A list reload after the first request is in flight.
    pub reloading: bool,
    pub on_action: Callback<PostAction>,
}

#[function_component(DetailPane)]
pub(crate) fn detail_pane(props: &DetailPaneProps) -> Html {
    let Some(detail) = props.detail.as_ref() else {
        return html! {
            <>
                <div id="content">{ placeholder(props) }</div>
                <div id="author" />
                <div id="comments" />
            </>
        };
    };
    let retry = {
        let post_id = detail.post.id;
        props
            .on_action
            .reform(move |_: MouseEvent| PostAction::RetryDetail(post_id))
    };
    html! {
        <>
            <div id="content">
                <h2>{ detail.post.title.clone() }</h2>
                <p>{ detail.post.body.clone() }</p>
            </div>
            <div id="author" class="author">{ render_author(&detail.author, &retry) }</div>
            { render_comments_heading(&detail.comments) }
            <div id="comments">{ render_comments(&detail.comments, &retry) }</div>
        </>
    }
}

fn placeholder(props: &DetailPaneProps) -> Html {
    if props.missing {
        let onclick = props.on_action.reform(|_: MouseEvent| PostAction::Deselect);
        return html! {
            <EmptyState
                kind={EmptyKind::NotFound}
                title="Post not found"
                description={Some(AttrValue::from("The selected post is not in the list."))}
            >
                <button {onclick}>{"Back to posts"}</button>
            </EmptyState>
        };
    }
    match &props.status {
        ListStatus::Loading if props.reloading => {
            html! { <InlineLoading label="Reloading posts…" /> }
        }
        ListStatus::Loading => html! {},
        ListStatus::Ready => html! { { SELECT_PROMPT } },
        ListStatus::Failed(message) => {
            let onclick = props.on_action.reform(|_: MouseEvent| PostAction::ReloadList);
            html! {
                <EmptyState
                    kind={EmptyKind::Error}
                    title="Posts unavailable"
                    description={Some(AttrValue::from(message.clone()))}
                >
                    <button {onclick}>{"Retry"}</button>
                </EmptyState>
            }
        }
    }
}

fn render_failure(message: &str, retry: &Callback<MouseEvent>) -> Html {
    html! {
        <p class="error">
            { message.to_string() }{" "}
            <button onclick={retry.clone()}>{"Retry"}</button>
        </p>
    }
}

fn render_author(author: &AuthorEntry, retry: &Callback<MouseEvent>) -> Html {
    match author {
        Remote::Loading => html! { <InlineLoading label="Loading author…" /> },
        Remote::Ready(author) => html! {
            <h3>{ author.name.clone() }{" "}<small>{ author_contact(author) }</small></h3>
        },
        Remote::Failed(message) => render_failure(message, retry),
    }
}

fn render_comments_heading(comments: &CommentsEntry) -> Html {
    match comments {
        Remote::Ready(list) => html! { <h3 class="muted">{ comments_heading(list.len()) }</h3> },
        Remote::Loading | Remote::Failed(_) => html! {},
    }
}

fn render_comments(comments: &CommentsEntry, retry: &Callback<MouseEvent>) -> Html {
    match comments {
        Remote::Loading => html! { <InlineLoading label="Loading comments…" /> },
        Remote::Ready(list) => html! { { for list.iter().map(render_comment) } },
        Remote::Failed(message) => render_failure(message, retry),
    }
}

fn render_comment(comment: &Comment) -> Html {
    html! {
        <div key={comment.id} class="comment">
            <h4><i>{ comment.name.clone() }</i>{" by "}<code>{ comment.email.clone() }</code></h4>
            <p>{ comment.body.clone() }</p>
        </div>
    }
}
