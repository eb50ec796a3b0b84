//! Test infrastructure shared by service tests.

mod context;

pub(crate) use context::TestContext;
