//! Cart Repositories

mod positions;

pub(crate) use positions::PgCartPositionsRepository;
