use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, TransactionTrait};
use tracing::{debug, info};

use super::{Pagination, created};
use crate::{
    AppState,
    dtos::endereco::{EnderecoDto, ReadEnderecoDto},
    entities::endereco,
    error::{AppError, AppResult},
    extract::ValidatedJson,
    patch::{self, PatchOperation},
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(dto): ValidatedJson<EnderecoDto>,
) -> AppResult<impl IntoResponse> {
    let txn = state.db.begin().await?;
    let model = dto.into_new_model().insert(&txn).await?;
    txn.commit().await?;

    info!(id = model.id, "endereco created");
    Ok(created(format!("/endereco/{}", model.id), ReadEnderecoDto::from(model)))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Vec<ReadEnderecoDto>>> {
    let txn = state.db.begin().await?;
    let enderecos = endereco::Entity::find()
        .order_by_asc(endereco::Column::Id)
        .offset(u64::from(page.skip))
        .limit(u64::from(page.take))
        .all(&txn)
        .await?;
    txn.commit().await?;

    debug!(skip = page.skip, take = page.take, found = enderecos.len(), "listed enderecos");
    Ok(Json(enderecos.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReadEnderecoDto>> {
    let txn = state.db.begin().await?;
    let model = endereco::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<EnderecoDto>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    endereco::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, "endereco updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let model = endereco::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    let dto = patch::apply(&EnderecoDto::from(model), &operations)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, operations = operations.len(), "endereco patched");
    Ok(StatusCode::NO_CONTENT)
}

/// Cinemas still pointing at the address make the database reject the delete.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let result = endereco::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "endereco deleted");
    Ok(StatusCode::NO_CONTENT)
}
