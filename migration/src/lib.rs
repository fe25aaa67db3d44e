pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_filmes;
mod m20240301_000002_create_enderecos_and_cinemas;
mod m20240315_000001_create_sessoes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_filmes::Migration),
            Box::new(m20240301_000002_create_enderecos_and_cinemas::Migration),
            Box::new(m20240315_000001_create_sessoes::Migration),
        ]
    }
}
