//! Carts
//!
//! Session-scoped cart positions for an event, and the summary the storefront
//! renders from them.

pub mod errors;
pub mod filter;
pub mod identity;
pub mod models;
mod repositories;
pub mod service;
pub mod session;
pub mod summary;

pub use errors::CartsServiceError;
pub use filter::CartFilter;
pub use identity::Identity;
pub use service::*;
pub use session::{SessionKey, SessionState};
pub use summary::{CartGroup, CartSummary, GroupKey};
