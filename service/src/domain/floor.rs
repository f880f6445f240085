//! [`Floor`] definitions.

use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Room;

/// Floor of the property holding [`Room`]s.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Floor {
    /// [`Number`] of this [`Floor`], unique within the [`Catalog`].
    ///
    /// [`Catalog`]: crate::domain::Catalog
    pub number: Number,
}

impl Floor {
    /// Creates a new [`Floor`] if the provided `number` is valid.
    ///
    /// Zero is reserved as "no floor".
    #[must_use]
    pub const fn new(number: Number) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(Self { number })
        }
    }
}

/// Number of a [`Floor`].
///
/// Negative numbers denote underground floors.
pub type Number = i16;
