//! HTTP server initialization.
//!
//! [`serve`] wires the database and the API router into a running axum
//! server with graceful shutdown on ctrl-c.

use anyhow::Result;

use crate::api::{self, AppState};
use crate::config::HoloConfig;
use crate::db;

/// Start the HoloMente HTTP server.
pub async fn serve(config: HoloConfig) -> Result<()> {
    let bind_addr = config.bind_addr();

    let conn = db::open_database(config.resolved_db_path())?;

    // A fresh database gets the built-in personas before the first request
    let seeded = db::seed::seed_companions(&conn)?;
    if seeded > 0 {
        tracing::info!(seeded, "companions seeded");
    }

    let state = AppState::new(conn);
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "HoloMente listening at http://{bind_addr}/api");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
