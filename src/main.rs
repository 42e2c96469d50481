use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::http::{header, Method};
use dotenvy::dotenv;
use notes_server::{create_router, store::PgStore, AppState, Config};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let _ = dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("Connection to the database is successful");
            pool
        }
        Err(err) => {
            error!("Failed to connect to the database: {err}");
            std::process::exit(1);
        }
    };

    let store = PgStore::new(pool);
    if let Err(err) = store.init_schema().await {
        error!("Failed to create tables: {err}");
        std::process::exit(1);
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(Any);

    let port = config.port;
    let app_state = Arc::new(AppState {
        store: Arc::new(store),
        config,
    });
    let app = create_router(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), port);
    info!("Server started successfully on {addr}");
    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        error!("Server error: {err}");
        std::process::exit(1);
    }
}
