//! Application pages

mod create_post;

pub use create_post::*;
