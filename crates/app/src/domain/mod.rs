//! Box Office Domain Concerns

pub mod carts;
pub mod events;
pub mod products;
