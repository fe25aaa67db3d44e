mod config;
mod db;
mod dtos;
mod entities;
mod error;
mod extract;
mod patch;
mod routes;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    routes::{cinema, endereco, filme, sessao},
};

pub struct AppState {
    pub db: DatabaseConnection,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,filmes_api=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let app = build_router(Arc::new(AppState { db }));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/filme", get(filme::list).post(filme::create))
        .route(
            "/filme/{id}",
            get(filme::get).put(filme::update).patch(filme::patch).delete(filme::delete),
        )
        .route("/cinema", get(cinema::list).post(cinema::create))
        .route(
            "/cinema/{id}",
            get(cinema::get).put(cinema::update).patch(cinema::patch).delete(cinema::delete),
        )
        .route("/endereco", get(endereco::list).post(endereco::create))
        .route(
            "/endereco/{id}",
            get(endereco::get)
                .put(endereco::update)
                .patch(endereco::patch)
                .delete(endereco::delete),
        )
        .route("/sessao", get(sessao::list).post(sessao::create))
        .route("/sessao/{filme_id}/{cinema_id}", get(sessao::get))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
