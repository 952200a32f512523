//! Payroll engine API server entry point.

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::{TaxTable, TaxTableLoader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let table = match std::env::var("PAYROLL_TAX_TABLE") {
        Ok(path) => match TaxTableLoader::load(&path) {
            Ok(loader) => {
                tracing::info!(path = %path, year = loader.table().year, "Loaded tax table");
                loader.table().clone()
            }
            Err(err) => {
                tracing::error!(path = %path, error = %err, "Failed to load tax table");
                std::process::exit(1);
            }
        },
        Err(_) => {
            tracing::info!("PAYROLL_TAX_TABLE not set; using built-in 2024 tables");
            TaxTable::brazil_2024()
        }
    };

    let app = create_router(AppState::new(table));

    let bind_addr =
        std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| {
            tracing::error!(addr = %bind_addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        });

    tracing::info!(addr = %bind_addr, "Payroll engine listening");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
