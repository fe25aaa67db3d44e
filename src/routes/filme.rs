use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, LikeExpr, SimpleExpr},
};
use serde::Deserialize;
use tracing::{debug, info};

use super::{created, default_take};
use crate::{
    AppState,
    dtos::filme::{FilmeDto, ReadFilmeDto},
    entities::filme,
    error::{AppError, AppResult},
    extract::ValidatedJson,
    patch::{self, PatchOperation},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    skip: u32,
    #[serde(default = "default_take")]
    take: u32,
    titulo: Option<String>,
}

/// Literal substring match: `%`, `_` and `\` in the input carry no wildcard meaning.
fn titulo_contains(text: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Expr::col(filme::Column::Titulo).like(LikeExpr::new(pattern).escape('\\'))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(dto): ValidatedJson<FilmeDto>,
) -> AppResult<impl IntoResponse> {
    let txn = state.db.begin().await?;
    let model = dto.into_new_model().insert(&txn).await?;
    txn.commit().await?;

    info!(id = model.id, titulo = %model.titulo, "filme created");
    Ok(created(format!("/filme/{}", model.id), ReadFilmeDto::from(model)))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> AppResult<Json<Vec<ReadFilmeDto>>> {
    let txn = state.db.begin().await?;

    let mut query = filme::Entity::find();
    if let Some(titulo) = q.titulo.as_deref() {
        query = query.filter(titulo_contains(titulo));
    }
    let filmes = query
        .order_by_asc(filme::Column::Id)
        .offset(u64::from(q.skip))
        .limit(u64::from(q.take))
        .all(&txn)
        .await?;
    txn.commit().await?;

    debug!(skip = q.skip, take = q.take, titulo = ?q.titulo, found = filmes.len(), "listed filmes");
    Ok(Json(filmes.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReadFilmeDto>> {
    let txn = state.db.begin().await?;
    let model = filme::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<FilmeDto>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    filme::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, "filme updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let model = filme::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    let dto = patch::apply(&FilmeDto::from(model), &operations)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, operations = operations.len(), "filme patched");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let result = filme::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "filme deleted");
    Ok(StatusCode::NO_CONTENT)
}
