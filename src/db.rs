use chrono::NaiveDate;

use crate::geo::Coord;
use crate::stations::{self, Station};

#[derive(Clone)]
pub struct Database {
    pub pool: sqlx::PgPool,
}

impl Database {
    pub async fn connect(pg_url: &str) -> anyhow::Result<Self> {
        let pool = sqlx::PgPool::connect(pg_url).await?;

        Ok(Database { pool })
    }

    /// Snapshot of the full station table, converted to typed records at
    /// this boundary. Names arrive as raw bytes and are decoded here.
    pub async fn list_stations(&self) -> Result<Vec<Station>, sqlx::Error> {
        let rows: Vec<(i32, Vec<u8>, f64, f64, i32, i32)> = sqlx::query_as("
            SELECT station_id, station_name, location_lat, location_lng, available_bikes, capacity
            FROM locations;
        ")
            .fetch_all(&self.pool)
            .await?;

        let stations = rows
            .into_iter()
            .map(|(station_id, name, lat, lng, available_bikes, capacity)| Station {
                station_id,
                station_name: stations::decode_station_name(&name),
                location: Coord { lat, lon: lng },
                available_bikes,
                capacity,
            })
            .collect();

        Ok(stations)
    }

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("
            INSERT INTO users (username, password)
            VALUES ($1, $2);
        ")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn password_hash_for(
        &self,
        username: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("
            SELECT password FROM users WHERE username = $1;
        ")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn record_late(
        &self,
        user_id: &str,
        late_date: NaiveDate,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("
            INSERT INTO late_records (user_id, late_date)
            VALUES ($1, $2);
        ")
            .bind(user_id)
            .bind(late_date)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn late_count(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("
            SELECT COUNT(*) FROM late_records WHERE user_id = $1;
        ")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }
}
