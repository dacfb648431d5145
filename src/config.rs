use std::env::VarError;

use anyhow::anyhow;

use crate::stations::DEFAULT_NEARBY_RADIUS_M;

pub const REQUIRED_VARIABLES: &[&str] = &["PG_URL", "LISTEN_PORT"];

pub struct Config {
    pub pg_url: String,
    pub listen_port: u16,
    /// Search radius for /get_nearby_stations. Optional; the reference
    /// service hardcoded 1 km.
    pub nearby_radius_m: f64,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let pg_url = env("PG_URL")?;

        let listen_port = env("LISTEN_PORT")?
            .parse()
            .map_err(|e| anyhow!("LISTEN_PORT is not a valid port number: {e}"))?;

        let nearby_radius_m = match std::env::var("NEARBY_RADIUS_M") {
            Ok(value) => {
                let radius: f64 = value
                    .parse()
                    .map_err(|e| anyhow!("NEARBY_RADIUS_M is not a valid number: {e}"))?;
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(anyhow!("NEARBY_RADIUS_M must be a positive number"));
                }
                radius
            }
            Err(_) => DEFAULT_NEARBY_RADIUS_M,
        };

        Ok(Self {
            pg_url,
            listen_port,
            nearby_radius_m,
        })
    }

    pub fn log(&self) {
        log::info!("PG_URL = {}", self.pg_url);
        log::info!("LISTEN_PORT = {}", self.listen_port);
        log::info!("NEARBY_RADIUS_M = {}", self.nearby_radius_m);
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}
