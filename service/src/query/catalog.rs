//! [`Query`] collection related to the [`Catalog`].

use common::operations::{All, By};

use crate::domain::{room, Floor, Room};
#[cfg(doc)]
use crate::{domain::Catalog, Query};

use super::DatabaseQuery;

/// Queries all the [`Floor`]s sorted by their numbers.
pub type Floors = DatabaseQuery<By<Vec<Floor>, All>>;

/// Queries all the [`Room`]s in the [`Catalog`] order.
pub type Rooms = DatabaseQuery<By<Vec<Room>, All>>;

/// Queries a [`Room`] by its [`room::Name`].
pub type ByName = DatabaseQuery<By<Option<Room>, room::Name>>;
