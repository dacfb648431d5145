//! Station records and the proximity/bounds query core.
//!
//! Both queries operate on a full snapshot of the station table handed in
//! by the store boundary; nothing here talks to the database or holds
//! state across calls.

use crate::geo::{self, Coord};

/// Default search radius for the nearby-stations query, overridable via
/// configuration.
pub const DEFAULT_NEARBY_RADIUS_M: f64 = 1000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub station_id: i32,
    pub station_name: String,
    pub location: Coord,
    /// Mutated by the fleet-update process; read-only here.
    pub available_bikes: i32,
    pub capacity: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StationWithDistance {
    pub station: Station,
    /// Great-circle distance from the query point, in meters.
    pub distance: f64,
}

/// Lightweight projection for map rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationProjection {
    pub location: Coord,
    pub available_bikes: i32,
}

/// Stations strictly closer than `radius_m` to `user`, annotated with
/// their distance and sorted ascending. A station at exactly the radius
/// is excluded. Availability and capacity pass through untouched.
pub fn find_nearby(
    stations: Vec<Station>,
    user: Coord,
    radius_m: f64,
) -> Vec<StationWithDistance> {
    let mut nearby: Vec<StationWithDistance> = stations
        .into_iter()
        .filter_map(|station| {
            let distance = geo::distance(station.location, user);
            (distance < radius_m).then_some(StationWithDistance { station, distance })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    nearby
}

/// Projects every station in the snapshot. The viewport anchor supplied
/// by the caller is deliberately not used to filter here; the reference
/// service returned the full table and clients depend on it (see
/// DESIGN.md on the open viewport-filtering question).
pub fn project_all(stations: &[Station]) -> Vec<StationProjection> {
    stations
        .iter()
        .map(|station| StationProjection {
            location: station.location,
            available_bikes: station.available_bikes,
        })
        .collect()
}

/// Decodes a station name the store hands back as raw bytes. Invalid
/// UTF-8 is replaced rather than rejected so a single bad row cannot
/// fail a whole query.
pub fn decode_station_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
