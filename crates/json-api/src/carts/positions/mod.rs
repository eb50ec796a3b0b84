//! Cart Positions

pub(crate) mod handlers;
