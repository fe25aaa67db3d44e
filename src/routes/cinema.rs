use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::{created, default_take};
use crate::{
    AppState,
    dtos::cinema::{CreateCinemaDto, ReadCinemaDto, UpdateCinemaDto},
    entities::{cinema, endereco},
    error::{AppError, AppResult},
    extract::ValidatedJson,
    patch::{self, PatchOperation},
};

/// `enderecoId` is typed, so anything but an integer is rejected before any SQL runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    skip: u32,
    #[serde(default = "default_take")]
    take: u32,
    endereco_id: Option<i32>,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(dto): ValidatedJson<CreateCinemaDto>,
) -> AppResult<impl IntoResponse> {
    let txn = state.db.begin().await?;
    let model = dto.into_new_model().insert(&txn).await?;
    let endereco = endereco::Entity::find_by_id(model.endereco_id).one(&txn).await?;
    txn.commit().await?;

    info!(id = model.id, endereco_id = model.endereco_id, "cinema created");
    Ok(created(format!("/cinema/{}", model.id), ReadCinemaDto::from((model, endereco))))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> AppResult<Json<Vec<ReadCinemaDto>>> {
    let txn = state.db.begin().await?;

    let mut query = cinema::Entity::find();
    if let Some(endereco_id) = q.endereco_id {
        query = query.filter(cinema::Column::EnderecoId.eq(endereco_id));
    }
    let cinemas = query
        .find_also_related(endereco::Entity)
        .order_by_asc(cinema::Column::Id)
        .offset(u64::from(q.skip))
        .limit(u64::from(q.take))
        .all(&txn)
        .await?;
    txn.commit().await?;

    debug!(
        skip = q.skip,
        take = q.take,
        endereco_id = ?q.endereco_id,
        found = cinemas.len(),
        "listed cinemas"
    );
    Ok(Json(cinemas.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReadCinemaDto>> {
    let txn = state.db.begin().await?;
    let row = cinema::Entity::find_by_id(id)
        .find_also_related(endereco::Entity)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;

    Ok(Json(row.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateCinemaDto>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    cinema::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, "cinema updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let model = cinema::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;
    let dto = patch::apply(&UpdateCinemaDto::from(model), &operations)?;
    dto.into_existing_model(id).update(&txn).await?;
    txn.commit().await?;

    info!(id, operations = operations.len(), "cinema patched");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let result = cinema::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "cinema deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode};
    use serde_json::json;

    use crate::testing::{self, delete, get, patch, post, put};

    async fn seed_endereco(app: &Router, logradouro: &str) -> i64 {
        let res = post(
            app,
            "/endereco",
            json!({ "logradouro": logradouro, "numero": 100, "cidade": "Rio de Janeiro" }),
        )
        .await;
        res.body["id"].as_i64().unwrap()
    }

    async fn seed_cinema(app: &Router, nome: &str, endereco_id: i64) -> i64 {
        let res = post(app, "/cinema", json!({ "nome": nome, "enderecoId": endereco_id })).await;
        assert_eq!(res.status, StatusCode::CREATED);
        res.body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn create_embeds_the_linked_address() {
        let app = testing::app().await;
        let endereco_id = seed_endereco(&app, "Rua Voluntários da Pátria").await;

        let created =
            post(&app, "/cinema", json!({ "nome": "Estação Botafogo", "enderecoId": endereco_id }))
                .await;

        assert_eq!(created.status, StatusCode::CREATED);
        let id = created.body["id"].as_i64().unwrap();
        assert_eq!(created.location(), format!("/cinema/{id}"));
        assert_eq!(created.body["enderecoId"].as_i64(), Some(endereco_id));
        assert_eq!(created.body["endereco"]["logradouro"], "Rua Voluntários da Pátria");
        assert_eq!(get(&app, &format!("/cinema/{id}")).await.body, created.body);
    }

    #[tokio::test]
    async fn create_with_missing_address_is_a_server_error() {
        let app = testing::app().await;

        let res = post(&app, "/cinema", json!({ "nome": "Fantasma", "enderecoId": 42 })).await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(get(&app, "/cinema").await.body, json!([]));
    }

    #[tokio::test]
    async fn list_filters_by_address_with_bound_parameter() {
        let app = testing::app().await;
        let centro = seed_endereco(&app, "Centro").await;
        let praia = seed_endereco(&app, "Praia").await;
        seed_cinema(&app, "Odeon", centro).await;
        seed_cinema(&app, "Roxy", praia).await;
        seed_cinema(&app, "Palácio", centro).await;

        let res = get(&app, &format!("/cinema?enderecoId={centro}")).await;

        let names: Vec<&str> =
            res.body.as_array().unwrap().iter().map(|c| c["nome"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Odeon", "Palácio"]);
        assert_eq!(get(&app, "/cinema").await.body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn address_filter_does_not_accept_sql_fragments() {
        let app = testing::app().await;
        let centro = seed_endereco(&app, "Centro").await;
        seed_cinema(&app, "Odeon", centro).await;

        let res = get(&app, "/cinema?enderecoId=0%20OR%201%3D1").await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(!res.body.to_string().contains("Odeon"));
    }

    #[tokio::test]
    async fn oversized_pagination_is_rejected() {
        let app = testing::app().await;
        assert_eq!(
            get(&app, "/cinema?take=18446744073709551615").await.status,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn put_keeps_the_address_link() {
        let app = testing::app().await;
        let endereco_id = seed_endereco(&app, "Centro").await;
        let id = seed_cinema(&app, "Odeon", endereco_id).await;

        let res =
            put(&app, &format!("/cinema/{id}"), json!({ "nome": "Odeon Petrobras", "enderecoId": 999 }))
                .await;

        assert_eq!(res.status, StatusCode::NO_CONTENT);
        let fetched = get(&app, &format!("/cinema/{id}")).await.body;
        assert_eq!(fetched["nome"], "Odeon Petrobras");
        assert_eq!(fetched["enderecoId"].as_i64(), Some(endereco_id));
    }

    #[tokio::test]
    async fn patch_validates_the_name() {
        let app = testing::app().await;
        let endereco_id = seed_endereco(&app, "Centro").await;
        let id = seed_cinema(&app, "Odeon", endereco_id).await;
        let uri = format!("/cinema/{id}");

        let res = patch(&app, &uri, json!([{ "op": "replace", "path": "/nome", "value": "" }])).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res.body["errors"]["nome"].is_array());
        assert_eq!(get(&app, &uri).await.body["nome"], "Odeon");

        let res = patch(&app, &uri, json!([{ "op": "replace", "path": "/nome", "value": "Cine Odeon" }]))
            .await;
        assert_eq!(res.status, StatusCode::NO_CONTENT);
        assert_eq!(get(&app, &uri).await.body["nome"], "Cine Odeon");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = testing::app().await;

        assert_eq!(get(&app, "/cinema/7").await.status, StatusCode::NOT_FOUND);
        assert_eq!(put(&app, "/cinema/7", json!({ "nome": "X" })).await.status, StatusCode::NOT_FOUND);
        assert_eq!(
            patch(&app, "/cinema/7", json!([{ "op": "replace", "path": "/nome", "value": "X" }]))
                .await
                .status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(delete(&app, "/cinema/7").await.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_the_cinema_but_not_its_address() {
        let app = testing::app().await;
        let endereco_id = seed_endereco(&app, "Centro").await;
        let id = seed_cinema(&app, "Odeon", endereco_id).await;

        assert_eq!(delete(&app, &format!("/cinema/{id}")).await.status, StatusCode::NO_CONTENT);
        assert_eq!(get(&app, &format!("/cinema/{id}")).await.status, StatusCode::NOT_FOUND);
        assert_eq!(get(&app, &format!("/endereco/{endereco_id}")).await.status, StatusCode::OK);
    }
}
