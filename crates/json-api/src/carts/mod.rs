//! Carts
//!
//! The visitor's cart for the routed event, plus adding and removing positions.

mod errors;
pub(crate) mod handlers;
mod models;
pub(crate) mod positions;

pub(crate) use models::{CartGroupResponse, CartResponse};
