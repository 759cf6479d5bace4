//! Station metadata and search statistics types.

use crate::forecast::Coordinate;
use serde::{Deserialize, Serialize};

/// A sensor station as served by `GET /stations`.
///
/// The list is fetched once per app load and treated as read-only: it
/// resolves `nearest_station` ids to map coordinates, renders the marker
/// layer, and supplies the contributing-stations overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
}

/// A ranked search query as served by `GET /popular-searches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularSearch {
    pub name: String,
    pub count: u64,
}
