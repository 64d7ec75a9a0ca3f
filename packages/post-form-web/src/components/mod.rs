//! Reusable UI components

mod error_banner;
mod loading;

pub use error_banner::*;
pub use loading::*;
