use sea_orm::entity::prelude::*;

/// A scheduled showing of a filme at a cinema, identified by the pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessoes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub filme_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub cinema_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::filme::Entity",
        from = "Column::FilmeId",
        to = "super::filme::Column::Id"
    )]
    Filme,
    #[sea_orm(
        belongs_to = "super::cinema::Entity",
        from = "Column::CinemaId",
        to = "super::cinema::Column::Id"
    )]
    Cinema,
}

impl Related<super::filme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filme.def()
    }
}

impl Related<super::cinema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cinema.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
