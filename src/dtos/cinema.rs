use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::endereco::ReadEnderecoDto;
use crate::entities::{cinema, endereco};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCinemaDto {
    #[validate(length(min = 1, max = 100, message = "O nome do cinema é obrigatório e tem no máximo 100 caracteres"))]
    pub nome: String,
    #[validate(range(min = 1, message = "O endereço do cinema é obrigatório"))]
    pub endereco_id: i32,
}

impl CreateCinemaDto {
    pub fn into_new_model(self) -> cinema::ActiveModel {
        cinema::ActiveModel { id: NotSet, nome: Set(self.nome), endereco_id: Set(self.endereco_id) }
    }
}

/// The address link is fixed at creation; updates only touch the name.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCinemaDto {
    #[validate(length(min = 1, max = 100, message = "O nome do cinema é obrigatório e tem no máximo 100 caracteres"))]
    pub nome: String,
}

impl UpdateCinemaDto {
    pub fn into_existing_model(self, id: i32) -> cinema::ActiveModel {
        cinema::ActiveModel { id: Unchanged(id), nome: Set(self.nome), endereco_id: NotSet }
    }
}

impl From<cinema::Model> for UpdateCinemaDto {
    fn from(model: cinema::Model) -> Self {
        Self { nome: model.nome }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadCinemaDto {
    pub id: i32,
    pub nome: String,
    pub endereco_id: i32,
    pub endereco: Option<ReadEnderecoDto>,
}

impl From<(cinema::Model, Option<endereco::Model>)> for ReadCinemaDto {
    fn from((model, endereco): (cinema::Model, Option<endereco::Model>)) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            endereco_id: model.endereco_id,
            endereco: endereco.map(Into::into),
        }
    }
}
