#![warn(clippy::all, rust_2018_idioms)]

//! Building blocks shared by the app: the event trait, the string lookup
//! service, text persistence and a helper for string errors.

pub mod event;
pub mod properties;
pub mod storage;
pub mod string_error;
