use axum::routing::{get, post};

use super::endpoints;

pub fn router(state: super::State) -> axum::Router {
    axum::Router::new()
        .route("/signup", post(endpoints::signup))
        .route("/login", post(endpoints::login))
        .route("/record_late", post(endpoints::record_late))
        .route("/get_late_count", get(endpoints::get_late_count))
        .route("/get_nearby_stations", post(endpoints::get_nearby_stations))
        .route("/get_stations_in_bounds", post(endpoints::get_stations_in_bounds))
        .with_state(state)
}
