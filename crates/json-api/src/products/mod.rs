//! Products
//!
//! The catalogue of the routed event, for building cart positions against.

mod errors;
pub(crate) mod handlers;
mod models;

pub(crate) use models::ProductResponse;
