//! Request wiring between the API client and the posts slice.

use crate::core::store::AppStore;
use crate::features::posts::state::{
    begin_posts, detail_requests, fail_posts, finish_author, finish_comments,
    mark_author_loading, mark_comments_loading, set_posts,
};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Fetch the post list into the store.
pub(crate) fn load_posts(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) {
    dispatch.reduce_mut(|store| begin_posts(&mut store.posts));
    yew::platform::spawn_local(async move {
        match client.fetch_posts().await {
            Ok(posts) => dispatch.reduce_mut(|store| set_posts(&mut store.posts, posts)),
            Err(err) => {
                console::error!(err.to_string());
                let message = err.user_message();
                dispatch.reduce_mut(|store| fail_posts(&mut store.posts, message));
            }
        }
    });
}

/// Issue the author and comments requests a post's detail still needs.
pub(crate) fn ensure_detail(client: &Rc<ApiClient>, dispatch: &Dispatch<AppStore>, post_id: u64) {
    let requests = detail_requests(&dispatch.get().posts, post_id);
    if let Some(user_id) = requests.author {
        fetch_author(Rc::clone(client), dispatch.clone(), user_id);
    }
    if let Some(post_id) = requests.comments {
        fetch_comments(Rc::clone(client), dispatch.clone(), post_id);
    }
}

fn fetch_author(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, user_id: u64) {
    dispatch.reduce_mut(|store| mark_author_loading(&mut store.posts, user_id));
    yew::platform::spawn_local(async move {
        let result = client.fetch_author(user_id).await.map_err(|err| {
            console::error!(err.to_string());
            err.user_message()
        });
        dispatch.reduce_mut(|store| finish_author(&mut store.posts, user_id, result));
    });
}

fn fetch_comments(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, post_id: u64) {
    dispatch.reduce_mut(|store| mark_comments_loading(&mut store.posts, post_id));
    yew::platform::spawn_local(async move {
        let result = client.fetch_comments(post_id).await.map_err(|err| {
            console::error!(err.to_string());
            err.user_message()
        });
        dispatch.reduce_mut(|store| finish_comments(&mut store.posts, post_id, result));
    });
}
