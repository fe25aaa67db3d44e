use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::sessao;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSessaoDto {
    #[validate(range(min = 1, message = "O filme da sessão é obrigatório"))]
    pub filme_id: i32,
    #[validate(range(min = 1, message = "O cinema da sessão é obrigatório"))]
    pub cinema_id: i32,
}

impl CreateSessaoDto {
    pub fn into_new_model(self) -> sessao::ActiveModel {
        sessao::ActiveModel { filme_id: Set(self.filme_id), cinema_id: Set(self.cinema_id) }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadSessaoDto {
    pub filme_id: i32,
    pub cinema_id: i32,
}

impl From<sessao::Model> for ReadSessaoDto {
    fn from(model: sessao::Model) -> Self {
        Self { filme_id: model.filme_id, cinema_id: model.cinema_id }
    }
}
