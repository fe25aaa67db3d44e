use jiff::civil::Date;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::filme;

/// Writable fields of a filme, accepted by create, update and patch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct FilmeDto {
    #[validate(length(min = 1, max = 50, message = "O título do filme é obrigatório e tem no máximo 50 caracteres"))]
    pub titulo: String,
    #[validate(length(min = 1, max = 50, message = "O gênero do filme é obrigatório e tem no máximo 50 caracteres"))]
    pub genero: String,
    #[validate(range(min = 70, max = 600, message = "A duração deve ter entre 70 e 600 minutos"))]
    pub duracao: i32,
    pub data_lancamento: Option<Date>,
}

impl FilmeDto {
    pub fn into_new_model(self) -> filme::ActiveModel {
        filme::ActiveModel {
            id: NotSet,
            titulo: Set(self.titulo),
            genero: Set(self.genero),
            duracao: Set(self.duracao),
            data_lancamento: Set(self.data_lancamento.map(|d| d.to_string())),
        }
    }

    pub fn into_existing_model(self, id: i32) -> filme::ActiveModel {
        filme::ActiveModel { id: Unchanged(id), ..self.into_new_model() }
    }
}

impl From<filme::Model> for FilmeDto {
    fn from(model: filme::Model) -> Self {
        Self {
            titulo: model.titulo,
            genero: model.genero,
            duracao: model.duracao,
            data_lancamento: parse_date(model.data_lancamento),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadFilmeDto {
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    pub duracao: i32,
    pub data_lancamento: Option<Date>,
}

impl From<filme::Model> for ReadFilmeDto {
    fn from(model: filme::Model) -> Self {
        Self {
            id: model.id,
            titulo: model.titulo,
            genero: model.genero,
            duracao: model.duracao,
            data_lancamento: parse_date(model.data_lancamento),
        }
    }
}

// Rows written by hand with a malformed date read back as "no date".
fn parse_date(raw: Option<String>) -> Option<Date> {
    raw.and_then(|s| s.parse().ok())
}
