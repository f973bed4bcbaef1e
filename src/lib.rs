//! Country directory: fetch, search, paginate, and annotate world countries.

pub mod config;
pub mod country;
pub mod directory;
pub mod facts;
pub mod favorites;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod source;
