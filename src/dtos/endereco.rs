use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::endereco;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EnderecoDto {
    #[validate(length(min = 1, max = 100, message = "O logradouro é obrigatório e tem no máximo 100 caracteres"))]
    pub logradouro: String,
    #[validate(range(min = 1, message = "O número deve ser positivo"))]
    pub numero: i32,
    #[validate(length(min = 1, max = 100, message = "A cidade é obrigatória e tem no máximo 100 caracteres"))]
    pub cidade: String,
}

impl EnderecoDto {
    pub fn into_new_model(self) -> endereco::ActiveModel {
        endereco::ActiveModel {
            id: NotSet,
            logradouro: Set(self.logradouro),
            numero: Set(self.numero),
            cidade: Set(self.cidade),
        }
    }

    pub fn into_existing_model(self, id: i32) -> endereco::ActiveModel {
        endereco::ActiveModel { id: Unchanged(id), ..self.into_new_model() }
    }
}

impl From<endereco::Model> for EnderecoDto {
    fn from(model: endereco::Model) -> Self {
        Self { logradouro: model.logradouro, numero: model.numero, cidade: model.cidade }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadEnderecoDto {
    pub id: i32,
    pub logradouro: String,
    pub numero: i32,
    pub cidade: String,
}

impl From<endereco::Model> for ReadEnderecoDto {
    fn from(model: endereco::Model) -> Self {
        Self {
            id: model.id,
            logradouro: model.logradouro,
            numero: model.numero,
            cidade: model.cidade,
        }
    }
}
