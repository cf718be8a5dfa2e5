use std::path::Path;
use anyhow::Context;
use crate::models::reserva_gen::ReservaGen;

/// Reservations held in memory, usually loaded from a JSON fixture file.
#[derive(Clone, Debug, Default)]
pub struct FixtureRepo {
    reservas: Vec<ReservaGen>,
}

impl FixtureRepo {
    pub fn new(mut reservas: Vec<ReservaGen>) -> Self {
        reservas.sort_by_key(|r| r.id_reservas_gen);
        Self { reservas }
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        let reservas: Vec<ReservaGen> = serde_json::from_slice(&raw)
            .with_context(|| format!("Fixture file {} is not a list of reservas", path.display()))?;

        Ok(Self::new(reservas))
    }

    pub fn retrieve_all_reservas(&self) -> Vec<ReservaGen> {
        self.reservas.clone()
    }

    pub fn retrieve_reserva(&self, id_reservas_gen: i32) -> Option<ReservaGen> {
        self.reservas
            .iter()
            .find(|r| r.id_reservas_gen == id_reservas_gen)
            .cloned()
    }
}
