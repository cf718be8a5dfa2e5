use crate::models::reserva_gen::ReservaGen;
use crate::repositories::fixture_repo::FixtureRepo;
use crate::repositories::postgres_repo::PostgresConnectionRepo;

pub mod fixture_repo;
pub mod postgres_repo;

/// Where the API server reads reservas from.
pub enum ReservaStore {
    Postgres(PostgresConnectionRepo),
    Fixture(FixtureRepo),
}

impl ReservaStore {
    pub async fn retrieve_all_reservas(&self) -> anyhow::Result<Vec<ReservaGen>> {
        match self {
            ReservaStore::Postgres(repo) => repo.retrieve_all_reservas().await,
            ReservaStore::Fixture(repo) => Ok(repo.retrieve_all_reservas()),
        }
    }

    pub async fn retrieve_reserva(
        &self,
        id_reservas_gen: i32,
    ) -> anyhow::Result<Option<ReservaGen>> {
        match self {
            ReservaStore::Postgres(repo) => repo.retrieve_reserva(id_reservas_gen).await,
            ReservaStore::Fixture(repo) => Ok(repo.retrieve_reserva(id_reservas_gen)),
        }
    }
}
