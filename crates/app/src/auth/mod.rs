//! Authentication
//!
//! Storefront visitors may log in with a bearer token. Carts of logged-in
//! visitors follow the user across sessions.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
