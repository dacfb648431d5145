//! Great-circle distance over geographic coordinates.
//!
//! The store keeps coordinates as degrees; everything here works on a
//! sphere of fixed radius, which is accurate to well under a percent for
//! station-to-user distances.

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Builds a coordinate, rejecting non-finite or out-of-range degrees.
    /// Latitude must lie in [-90, 90], longitude in [-180, 180].
    pub fn checked(lat: f64, lon: f64) -> Option<Self> {
        if lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
        {
            Some(Self { lat, lon })
        } else {
            None
        }
    }
}

/// Haversine distance between two coordinates, in meters.
///
/// Commutative, zero for identical points, and free of cancellation at
/// sub-meter separations (unlike the plain law of cosines).
pub fn distance(a: Coord, b: Coord) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_for_identical_points() {
        let p = Coord { lat: 37.5, lon: 127.0 };
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn commutative() {
        let a = Coord { lat: 37.5663, lon: 126.9779 };
        let b = Coord { lat: 35.1796, lon: 129.0756 };
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let a = Coord { lat: 0.0, lon: 0.0 };
        let b = Coord { lat: 0.0, lon: 1.0 };
        // pi / 180 * EARTH_RADIUS_M
        assert_relative_eq!(distance(a, b), 111_194.926_644_558_7, max_relative = 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_matches_longitude_at_equator() {
        let origin = Coord { lat: 0.0, lon: 0.0 };
        let north = Coord { lat: 1.0, lon: 0.0 };
        let east = Coord { lat: 0.0, lon: 1.0 };
        assert_relative_eq!(distance(origin, north), distance(origin, east), max_relative = 1e-12);
    }

    #[test]
    fn ten_meter_scale_in_seoul() {
        let station = Coord { lat: 37.5, lon: 127.0 };
        let user = Coord { lat: 37.5, lon: 127.0001 };
        let d = distance(station, user);
        // 0.0001 deg of longitude at 37.5N is ~8.82 m
        assert!((d - 8.82).abs() < 0.05, "got {d}");
    }

    #[test]
    fn stable_at_centimeter_scale() {
        let a = Coord { lat: 37.5, lon: 127.0 };
        let b = Coord { lat: 37.500_000_1, lon: 127.0 };
        let d = distance(a, b);
        // 1e-7 deg of latitude is ~1.11 cm
        assert!((d - 0.011_119_5).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(Coord::checked(90.0001, 0.0).is_none());
        assert!(Coord::checked(-90.0001, 0.0).is_none());
        assert!(Coord::checked(0.0, 180.0001).is_none());
        assert!(Coord::checked(0.0, -180.0001).is_none());
        assert!(Coord::checked(f64::NAN, 0.0).is_none());
        assert!(Coord::checked(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn checked_accepts_zero_and_bounds() {
        assert!(Coord::checked(0.0, 0.0).is_some());
        assert!(Coord::checked(90.0, 180.0).is_some());
        assert!(Coord::checked(-90.0, -180.0).is_some());
    }
}
