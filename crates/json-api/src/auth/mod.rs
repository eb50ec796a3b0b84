//! Authentication
//!
//! Bearer tokens are optional: anonymous visitors shop with their session alone.

pub(crate) mod middleware;
