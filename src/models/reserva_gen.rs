use serde::{Deserialize, Serialize};

/// Row of the `reservas_gen` table as exposed by the read API.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ReservaGen {
    pub id_reservas_gen: i32,
    pub tipo: String,
    pub administrador_id: i32,
    pub empleado_id: i32,
}
