use dockside::api::service::QueryConfig;
use dockside::config::{Config, REQUIRED_VARIABLES};
use dockside::db::Database;
use dockside::schema::SCHEMA;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let database = Database::connect(&config.pg_url).await?;
    log::info!("Connected to database ({})", config.pg_url);

    sqlx::raw_sql(SCHEMA).execute(&database.pool).await?;
    log::info!("Successfully ran init query");

    let state = dockside::api::service::State::new(
        database,
        QueryConfig {
            nearby_radius_m: config.nearby_radius_m,
        },
    );

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = dockside::api::service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
