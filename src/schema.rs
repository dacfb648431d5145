pub const SCHEMA: &'static str = r#"

CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS late_records (
    id SERIAL PRIMARY KEY,
    user_id TEXT NOT NULL,
    late_date DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS locations (
    station_id SERIAL PRIMARY KEY,
    station_name BYTEA NOT NULL,
    location_lat DOUBLE PRECISION NOT NULL,
    location_lng DOUBLE PRECISION NOT NULL,
    available_bikes INTEGER NOT NULL,
    capacity INTEGER NOT NULL
);

"#;
