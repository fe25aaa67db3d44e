use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enderecos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub logradouro: String,
    pub numero: i32,
    pub cidade: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cinema::Entity")]
    Cinemas,
}

impl Related<super::cinema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cinemas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
