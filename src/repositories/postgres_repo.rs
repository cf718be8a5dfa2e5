use anyhow::{anyhow, Context};
use bb8_postgres::bb8::{Pool, PooledConnection};
use bb8_postgres::PostgresConnectionManager;
use bb8_postgres::tokio_postgres::{NoTls, Row};
use tracing::warn;
use crate::models::reserva_gen::ReservaGen;

pub const RETRY_LIMIT: usize = 5;

pub struct PostgresConnectionRepo {
    postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
}

impl PostgresConnectionRepo {
    pub fn new(
        postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
    ) -> Self {
        Self {
            postgres_connection
        }
    }

    async fn get_postgres_connection(
        &self,
    ) -> anyhow::Result<PooledConnection<PostgresConnectionManager<NoTls>>> {
        for _ in 0..RETRY_LIMIT {
            match self.postgres_connection.get().await {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    warn!("Failed to retrieve postgres connection due to: {}, retrying in 3s", e);
                    tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                    continue;
                }
            }
        }

        Err(anyhow!("Failed to retrieve a valid connection from postgres pool, BAILING"))
    }

    pub async fn retrieve_all_reservas(&self) -> anyhow::Result<Vec<ReservaGen>> {
        let conn = self.get_postgres_connection().await?;
        let rows = conn
            .query(
                "SELECT id_reservas_gen, tipo, administrador_id, empleado_id \
                 FROM reservas_gen ORDER BY id_reservas_gen;",
                &[],
            )
            .await
            .context("Failed to query reservas_gen")?;

        rows.iter().map(parse_row_into_reserva).collect()
    }

    pub async fn retrieve_reserva(
        &self,
        id_reservas_gen: i32,
    ) -> anyhow::Result<Option<ReservaGen>> {
        let conn = self.get_postgres_connection().await?;
        let row = conn
            .query_opt(
                "SELECT id_reservas_gen, tipo, administrador_id, empleado_id \
                 FROM reservas_gen WHERE id_reservas_gen = $1;",
                &[&id_reservas_gen],
            )
            .await
            .with_context(|| format!("Failed to query reserva {}", id_reservas_gen))?;

        row.as_ref().map(parse_row_into_reserva).transpose()
    }
}

fn parse_row_into_reserva(row: &Row) -> anyhow::Result<ReservaGen> {
    Ok(ReservaGen {
        id_reservas_gen: row.try_get("id_reservas_gen").context("Bad id_reservas_gen column")?,
        tipo: row.try_get("tipo").context("Bad tipo column")?,
        administrador_id: row.try_get("administrador_id").context("Bad administrador_id column")?,
        empleado_id: row.try_get("empleado_id").context("Bad empleado_id column")?,
    })
}
