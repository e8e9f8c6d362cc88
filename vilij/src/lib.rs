#![warn(clippy::all, rust_2018_idioms)]

mod app;

pub use app::config::Config;
pub use app::resources::{load_catalog, load_properties, PropertyKey, PropertyText};
pub use app::storage;
pub use app::VilijApp;
