//! Cart Summary
//!
//! Collapses identical cart positions into rows with a quantity, totals them
//! and works out how long the visitor has before the first reservation lapses.

use std::collections::hash_map::Entry;

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::{
    carts::models::CartPosition,
    products::models::{ProductUuid, VariantUuid},
};

/// A cart amount did not fit in the amount type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart amount overflowed")]
pub struct AmountOverflowError;

/// Positions sharing a key are shown as one row.
///
/// Field order is the presentation order: product, then variant (positions
/// without a variant first), then price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub product: ProductUuid,
    pub variant: Option<VariantUuid>,
    pub price: u64,
}

impl From<&CartPosition> for GroupKey {
    fn from(position: &CartPosition) -> Self {
        Self {
            product: position.product,
            variant: position.variant,
            price: position.price,
        }
    }
}

/// A row of identical positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartGroup {
    /// Representative position; the one with the lowest UUID.
    pub position: CartPosition,

    /// Number of positions sharing the key.
    pub count: u64,

    /// `count * price`.
    pub total: u64,
}

impl CartGroup {
    #[must_use]
    pub fn key(&self) -> GroupKey {
        GroupKey::from(&self.position)
    }
}

/// Presentation-ready view of a visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub groups: Vec<CartGroup>,

    /// Sum of all group totals.
    pub total: u64,

    /// Whole minutes until the earliest reservation lapses, never negative.
    pub minutes_left: u64,

    earliest_expiry: Option<Timestamp>,
}

impl CartSummary {
    /// Build a summary from the positions of a single cart as seen at `now`.
    ///
    /// The result does not depend on the order of `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflowError`] if a line or grand total does not fit in a `u64`.
    pub fn from_positions<I>(positions: I, now: Timestamp) -> Result<Self, AmountOverflowError>
    where
        I: IntoIterator<Item = CartPosition>,
    {
        let mut buckets: FxHashMap<GroupKey, (CartPosition, u64)> = FxHashMap::default();
        let mut earliest_expiry: Option<Timestamp> = None;

        for position in positions {
            earliest_expiry = Some(
                earliest_expiry.map_or(position.expires_at, |earliest| {
                    earliest.min(position.expires_at)
                }),
            );

            match buckets.entry(GroupKey::from(&position)) {
                Entry::Occupied(mut entry) => {
                    let (representative, count) = entry.get_mut();

                    *count += 1;

                    if position.uuid < representative.uuid {
                        *representative = position;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert((position, 1));
                }
            }
        }

        let mut groups = buckets
            .into_values()
            .map(|(position, count)| {
                let total = position
                    .price
                    .checked_mul(count)
                    .ok_or(AmountOverflowError)?;

                Ok(CartGroup {
                    position,
                    count,
                    total,
                })
            })
            .collect::<Result<Vec<_>, AmountOverflowError>>()?;

        groups.sort_unstable_by_key(CartGroup::key);

        let total = groups.iter().try_fold(0_u64, |sum, group| {
            sum.checked_add(group.total).ok_or(AmountOverflowError)
        })?;

        let minutes_left = earliest_expiry.map_or(0, |expiry| minutes_until(expiry, now));

        Ok(Self {
            groups,
            total,
            minutes_left,
            earliest_expiry,
        })
    }

    /// Total number of positions across all groups.
    #[must_use]
    pub fn position_count(&self) -> u64 {
        self.groups.iter().map(|group| group.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Expiry of the first reservation to lapse, across every position.
    #[must_use]
    pub fn earliest_expiry(&self) -> Option<Timestamp> {
        self.earliest_expiry
    }
}

fn minutes_until(expiry: Timestamp, now: Timestamp) -> u64 {
    let remaining = expiry.duration_since(now).max(SignedDuration::ZERO);

    u64::try_from(remaining.as_secs() / 60).unwrap_or(0)
}
