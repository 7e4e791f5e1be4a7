//! Post list pane.

use crate::core::logic::list_label;
use crate::features::posts::actions::PostAction;
use postview_models::Post;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PostListProps {
    pub posts: Rc<Vec<Rc<Post>>>,
    pub selected: Option<u64>,
    pub on_action: Callback<PostAction>,
}

#[function_component(PostList)]
pub(crate) fn post_list(props: &PostListProps) -> Html {
    html! {
        <ul id="list">
            { for props.posts.iter().map(|post| render_entry(post, props.selected, &props.on_action)) }
        </ul>
    }
}

fn render_entry(post: &Post, selected: Option<u64>, on_action: &Callback<PostAction>) -> Html {
    let id = post.id;
    let onclick = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(PostAction::Select(id)))
    };
    let active = (selected == Some(id)).then_some("active");
    html! {
        <li key={id} class={classes!("title", active)} {onclick}>
            { list_label(post) }
        </li>
    }
}
