//! Post creation form - Dioxus frontend
//!
//! Renders the post creation form on top of the `post-form` controller.
//!
//! ## Running
//!
//! In the browser:
//! ```bash
//! POST_FORM_API_URL=http://localhost:3001 dx serve --features web
//! ```
//!
//! As a desktop window (reads `POST_FORM_API_URL` or `.env` at startup):
//! ```bash
//! dx serve --features desktop
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod routes;
mod state;

fn main() {
    // Native builds log through tracing-subscriber; web builds use the
    // logger dioxus installs at launch
    #[cfg(feature = "desktop")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    config::init_api_config(config::load_api_config());

    dioxus::launch(app::App);
}
