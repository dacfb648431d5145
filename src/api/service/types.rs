use serde::{Deserialize, Serialize};

use crate::stations::{StationProjection, StationWithDistance};

/// Client-supplied user identifier; the reference API accepted either a
/// JSON string or a number and echoed it back unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => write!(f, "{s}"),
        }
    }
}

/* /get_nearby_stations */

#[derive(Deserialize)]
pub struct NearbyStationsRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: Option<UserId>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct NearbyStation {
    pub station_id: i32,
    pub station_name: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub available_bikes: i32,
    pub capacity: i32,
    pub distance: f64,
}

impl From<StationWithDistance> for NearbyStation {
    fn from(value: StationWithDistance) -> Self {
        Self {
            station_id: value.station.station_id,
            station_name: value.station.station_name,
            location_lat: value.station.location.lat,
            location_lng: value.station.location.lon,
            available_bikes: value.station.available_bikes,
            capacity: value.station.capacity,
            distance: value.distance,
        }
    }
}

#[derive(Serialize)]
pub struct NearbyStationsResponse {
    pub user_id: UserId,
    pub latitude: f64,
    pub longitude: f64,
    pub nearby_stations: Vec<NearbyStation>,
}

/* /get_stations_in_bounds */

#[derive(Deserialize)]
pub struct StationsInBoundsRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct BoundsStation {
    pub location_lat: f64,
    pub location_lng: f64,
    pub available_bikes: i32,
}

impl From<StationProjection> for BoundsStation {
    fn from(value: StationProjection) -> Self {
        Self {
            location_lat: value.location.lat,
            location_lng: value.location.lon,
            available_bikes: value.available_bikes,
        }
    }
}

/* /signup and /login */

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/* /record_late and /get_late_count */

#[derive(Deserialize)]
pub struct RecordLateRequest {
    pub user_id: Option<UserId>,
}

#[derive(Serialize)]
pub struct RecordLateResponse {
    pub message: String,
    pub user_id: UserId,
    pub late_date: String,
}

#[derive(Deserialize)]
pub struct LateCountQuery {
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct LateCountResponse {
    pub user_id: String,
    pub late_count: i64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coord;
    use crate::stations::Station;

    #[test]
    fn user_id_accepts_string_or_number() {
        let n: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(n, UserId::Number(42));
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");

        let s: UserId = serde_json::from_str("\"rider-7\"").unwrap();
        assert_eq!(s, UserId::Text("rider-7".into()));
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"rider-7\"");
    }

    #[test]
    fn nearby_station_wire_shape() {
        let shaped = NearbyStation::from(StationWithDistance {
            station: Station {
                station_id: 3,
                station_name: "City Hall".into(),
                location: Coord { lat: 37.5663, lon: 126.9779 },
                available_bikes: 5,
                capacity: 10,
            },
            distance: 8.8,
        });

        let json = serde_json::to_value(&shaped).unwrap();
        assert_eq!(json["station_id"], 3);
        assert_eq!(json["station_name"], "City Hall");
        assert_eq!(json["location_lat"], 37.5663);
        assert_eq!(json["location_lng"], 126.9779);
        assert_eq!(json["available_bikes"], 5);
        assert_eq!(json["capacity"], 10);
        assert_eq!(json["distance"], 8.8);
    }

    #[test]
    fn bounds_station_carries_only_position_and_bikes() {
        let shaped = BoundsStation::from(StationProjection {
            location: Coord { lat: 37.5, lon: 127.0 },
            available_bikes: 2,
        });

        let json = serde_json::to_value(&shaped).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("location_lat"));
        assert!(object.contains_key("location_lng"));
        assert!(object.contains_key("available_bikes"));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let r: NearbyStationsRequest = serde_json::from_str("{\"longitude\": 127.0}").unwrap();
        assert!(r.latitude.is_none());
        assert_eq!(r.longitude, Some(127.0));
        assert!(r.id.is_none());
    }
}
