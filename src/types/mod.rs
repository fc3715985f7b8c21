//! Spec-level metadata types.

mod api;
mod parameter;
mod product;

pub use api::Api;
pub use parameter::{Parameter, TYPE_REPEAT, TYPE_REPEAT_LIST, required_first};
pub use product::Product;
