use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;

use crate::db::Database;
use crate::geo::Coord;
use crate::stations;

use super::types::*;
use super::{ApiError, QueryConfig};

pub type Result<T> = std::result::Result<T, ApiError>;

fn require_coord(latitude: Option<f64>, longitude: Option<f64>) -> Result<Coord> {
    let lat = latitude.ok_or_else(|| ApiError::Validation("missing latitude".into()))?;
    let lng = longitude.ok_or_else(|| ApiError::Validation("missing longitude".into()))?;

    Coord::checked(lat, lng)
        .ok_or_else(|| ApiError::Validation(format!("coordinate ({lat}, {lng}) is out of range")))
}

pub async fn get_nearby_stations(
    State(db): State<Database>,
    State(query): State<QueryConfig>,
    Json(r): Json<NearbyStationsRequest>,
) -> Result<Json<NearbyStationsResponse>> {
    let user_id = r.id.ok_or_else(|| ApiError::Validation("missing id".into()))?;
    let user = require_coord(r.latitude, r.longitude)?;

    let snapshot = db.list_stations().await?;
    let nearby = stations::find_nearby(snapshot, user, query.nearby_radius_m);

    Ok(Json(NearbyStationsResponse {
        user_id,
        latitude: user.lat,
        longitude: user.lon,
        nearby_stations: nearby.into_iter().map(NearbyStation::from).collect(),
    }))
}

pub async fn get_stations_in_bounds(
    State(db): State<Database>,
    Json(r): Json<StationsInBoundsRequest>,
) -> Result<Json<Vec<BoundsStation>>> {
    // The anchor is validated but does not narrow the result; the
    // reference service returned the whole table for this endpoint.
    let _anchor = require_coord(r.latitude, r.longitude)?;

    let snapshot = db.list_stations().await?;
    let projected = stations::project_all(&snapshot);

    Ok(Json(projected.into_iter().map(BoundsStation::from).collect()))
}

pub async fn signup(
    State(db): State<Database>,
    Json(r): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let (username, password) = require_credentials(r)?;

    let hash = hash_password(&password)?;
    db.create_user(&username, &hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".into(),
        }),
    ))
}

pub async fn login(
    State(db): State<Database>,
    Json(r): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<LoginResponse>)> {
    let (username, password) = require_credentials(r)?;

    let stored = db.password_hash_for(&username).await?;
    let authenticated = match stored {
        Some(hash) => verify_password(&password, &hash),
        None => false,
    };

    let response = if authenticated {
        (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "success".into(),
            }),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                message: "Invalid credentials".into(),
            }),
        )
    };

    Ok(response)
}

pub async fn record_late(
    State(db): State<Database>,
    Json(r): Json<RecordLateRequest>,
) -> Result<(StatusCode, Json<RecordLateResponse>)> {
    let user_id = r
        .user_id
        .ok_or_else(|| ApiError::Validation("User ID is required".into()))?;

    let today = chrono::Utc::now().date_naive();
    db.record_late(&user_id.to_string(), today).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordLateResponse {
            message: "Late record saved successfully".into(),
            user_id,
            late_date: today.to_string(),
        }),
    ))
}

pub async fn get_late_count(
    State(db): State<Database>,
    Query(q): Query<LateCountQuery>,
) -> Result<Json<LateCountResponse>> {
    let user_id = q
        .user_id
        .ok_or_else(|| ApiError::Validation("User ID is required".into()))?;

    let late_count = db.late_count(&user_id).await?;

    Ok(Json(LateCountResponse { user_id, late_count }))
}

fn require_credentials(r: CredentialsRequest) -> Result<(String, String)> {
    match (r.username, r.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(ApiError::Validation(
            "Username and password are required".into(),
        )),
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
