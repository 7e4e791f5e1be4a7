//! App shell: configuration, routing, and the initial post load.

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod routes;

use crate::components::atoms::{EmptyKind, EmptyState};
use crate::core::logic::parse_post_id;
use crate::core::store::AppStore;
use crate::features::posts::api::load_posts;
use crate::features::posts::view::PostsPage;
use api::ApiCtx;
use gloo_timers::future::TimeoutFuture;
use preferences::load_config;
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(PostviewApp)]
pub(crate) fn postview_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let api_ctx = {
        let config = config.clone();
        use_memo(move |_| ApiCtx::from_config(&config), ())
    };

    {
        let client = api_ctx.client.clone();
        let delay_ms = config.startup_delay_ms;
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    load_posts(client, Dispatch::<AppStore>::new());
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <PostsPage /> },
        Route::Post { id } => match parse_post_id(&id) {
            Some(id) => html! { <PostsPage selected={Some(id)} /> },
            None => not_found(),
        },
        Route::NotFound => not_found(),
    }
}

fn not_found() -> Html {
    html! {
        <EmptyState kind={EmptyKind::NotFound} title="Page not found">
            <Link<Route> to={Route::Home}>{"Back to posts"}</Link<Route>>
        </EmptyState>
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PostviewApp>::with_root(root).render();
    } else {
        yew::Renderer::<PostviewApp>::new().render();
    }
}
