use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessoes::Table)
                    .if_not_exists()
                    .col(integer(Sessoes::FilmeId))
                    .col(integer(Sessoes::CinemaId))
                    .primary_key(Index::create().col(Sessoes::FilmeId).col(Sessoes::CinemaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessoes_filme_id")
                            .from(Sessoes::Table, Sessoes::FilmeId)
                            .to(Filmes::Table, Filmes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessoes_cinema_id")
                            .from(Sessoes::Table, Sessoes::CinemaId)
                            .to(Cinemas::Table, Cinemas::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessoes_cinema_id")
                    .table(Sessoes::Table)
                    .col(Sessoes::CinemaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sessoes::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sessoes {
    Table,
    FilmeId,
    CinemaId,
}

#[derive(DeriveIden)]
enum Filmes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Cinemas {
    Table,
    Id,
}
