use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "filmes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    pub duracao: i32,
    /// ISO `YYYY-MM-DD`.
    pub data_lancamento: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessao::Entity")]
    Sessoes,
}

impl Related<super::sessao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessoes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
