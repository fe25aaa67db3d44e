use axum::{
    Json,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

pub mod cinema;
pub mod endereco;
pub mod filme;
pub mod sessao;

pub(crate) fn default_take() -> u32 {
    10
}

/// `?skip=&take=` for the list endpoints without extra filters.
/// `u32`: the SQLite binder narrows bound integers to `i64`.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_take")]
    pub take: u32,
}

/// 201 with a `Location` header pointing at the new resource.
fn created<T: Serialize>(location: String, body: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}
