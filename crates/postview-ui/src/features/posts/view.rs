//! Posts page: list pane plus detail pane for the routed selection.

mod detail;
mod list;

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::components::atoms::Spinner;
use crate::core::store::AppStore;
use crate::features::posts::actions::PostAction;
use crate::features::posts::api::{ensure_detail, load_posts};
use crate::features::posts::state::{
    list_reloading, select_detail, select_posts, select_selected_post, selection_missing,
    set_selected_id, show_spinner,
};
use detail::DetailPane;
use list::PostList;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct PostsPageProps {
    /// Post id taken from the route, if any.
    #[prop_or_default]
    pub selected: Option<u64>,
}

#[function_component(PostsPage)]
pub(crate) fn posts_page(props: &PostsPageProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let status = use_selector(|store: &AppStore| store.posts.status.clone());
    let spinner = use_selector(|store: &AppStore| show_spinner(&store.posts));
    let reloading = use_selector(|store: &AppStore| list_reloading(&store.posts));
    let posts = use_selector(|store: &AppStore| select_posts(&store.posts));
    let detail = use_selector(|store: &AppStore| select_detail(&store.posts));
    let missing = use_selector(|store: &AppStore| selection_missing(&store.posts));
    // Id of the selection once the list knows it.
    let selected_post = use_selector(|store: &AppStore| {
        select_selected_post(&store.posts).map(|post| post.id)
    });

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |selected| {
                let selected = *selected;
                dispatch.reduce_mut(|store| set_selected_id(&mut store.posts, selected));
                || ()
            },
            props.selected,
        );
    }
    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |selected_post| {
                if let (Some(post_id), Some(ctx)) = (**selected_post, api_ctx) {
                    ensure_detail(&ctx.client, &dispatch, post_id);
                }
                || ()
            },
            selected_post,
        );
    }

    let on_action = Callback::from(move |action: PostAction| {
        let Some(ctx) = &api_ctx else {
            return;
        };
        match action {
            PostAction::Select(id) => {
                // Re-selecting the current post keeps the route, so retry here.
                ensure_detail(&ctx.client, &dispatch, id);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Post { id: id.to_string() });
                }
            }
            PostAction::Deselect => {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            PostAction::ReloadList => load_posts(ctx.client.clone(), dispatch.clone()),
            PostAction::RetryDetail(id) => ensure_detail(&ctx.client, &dispatch, id),
        }
    });

    html! {
        <div class="postview">
            <aside class="sidebar">
                {if *spinner {
                    html! { <Spinner /> }
                } else {
                    html! {}
                }}
                <PostList
                    posts={posts}
                    selected={props.selected}
                    on_action={on_action.clone()}
                />
            </aside>
            <main class="detail">
                <DetailPane
                    status={(*status).clone()}
                    detail={(*detail).clone()}
                    missing={*missing}
                    reloading={*reloading}
                    on_action={on_action}
                />
            </main>
        </div>
    }
}
