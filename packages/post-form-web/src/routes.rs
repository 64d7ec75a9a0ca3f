//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::CreatePost;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    CreatePost {},
}
