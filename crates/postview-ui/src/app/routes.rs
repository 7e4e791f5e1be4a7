//! Routing definitions for the Postview UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/posts/:id")]
    Post { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
