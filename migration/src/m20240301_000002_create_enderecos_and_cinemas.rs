use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enderecos::Table)
                    .if_not_exists()
                    .col(pk_auto(Enderecos::Id))
                    .col(string_len(Enderecos::Logradouro, 100))
                    .col(integer(Enderecos::Numero))
                    .col(string_len(Enderecos::Cidade, 100))
                    .to_owned(),
            )
            .await?;

        // No ON DELETE action: removing a referenced endereco is rejected by the database.
        manager
            .create_table(
                Table::create()
                    .table(Cinemas::Table)
                    .if_not_exists()
                    .col(pk_auto(Cinemas::Id))
                    .col(string_len(Cinemas::Nome, 100))
                    .col(integer(Cinemas::EnderecoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cinemas_endereco_id")
                            .from(Cinemas::Table, Cinemas::EnderecoId)
                            .to(Enderecos::Table, Enderecos::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cinemas_endereco_id")
                    .table(Cinemas::Table)
                    .col(Cinemas::EnderecoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cinemas::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Enderecos::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enderecos {
    Table,
    Id,
    Logradouro,
    Numero,
    Cidade,
}

#[derive(DeriveIden)]
enum Cinemas {
    Table,
    Id,
    Nome,
    EnderecoId,
}
