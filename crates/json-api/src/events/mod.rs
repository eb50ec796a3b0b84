//! Event context
//!
//! Every storefront route is scoped by an `{event}` slug. The middleware
//! resolves it once per request; handlers wrap their payload together with the
//! resolved event in an [`EventContext`].

mod context;
mod errors;
pub(crate) mod middleware;

pub(crate) use context::EventContext;
