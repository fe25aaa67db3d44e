use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, TransactionTrait};
use tracing::{debug, info};

use super::{Pagination, created};
use crate::{
    AppState,
    dtos::sessao::{CreateSessaoDto, ReadSessaoDto},
    entities::sessao,
    error::{AppError, AppResult},
    extract::ValidatedJson,
};

// Sessions are immutable once scheduled: no update, patch or delete handlers.

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(dto): ValidatedJson<CreateSessaoDto>,
) -> AppResult<impl IntoResponse> {
    let (filme_id, cinema_id) = (dto.filme_id, dto.cinema_id);

    let txn = state.db.begin().await?;
    sessao::Entity::insert(dto.into_new_model()).exec_without_returning(&txn).await?;
    txn.commit().await?;

    info!(filme_id, cinema_id, "sessao created");
    Ok(created(
        format!("/sessao/{filme_id}/{cinema_id}"),
        ReadSessaoDto { filme_id, cinema_id },
    ))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Vec<ReadSessaoDto>>> {
    let txn = state.db.begin().await?;
    let sessoes = sessao::Entity::find()
        .order_by_asc(sessao::Column::FilmeId)
        .order_by_asc(sessao::Column::CinemaId)
        .offset(u64::from(page.skip))
        .limit(u64::from(page.take))
        .all(&txn)
        .await?;
    txn.commit().await?;

    debug!(skip = page.skip, take = page.take, found = sessoes.len(), "listed sessoes");
    Ok(Json(sessoes.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path((filme_id, cinema_id)): Path<(i32, i32)>,
) -> AppResult<Json<ReadSessaoDto>> {
    let txn = state.db.begin().await?;
    let model = sessao::Entity::find_by_id((filme_id, cinema_id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;

    Ok(Json(model.into()))
}
