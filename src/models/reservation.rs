use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a general reservation. The API may hand it out as a number
/// or as a string, both are rendered verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ReservationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationId::Number(n) => write!(f, "{}", n),
            ReservationId::Text(s) => f.write_str(s),
        }
    }
}

/// A reservation as the list view sees it: the identifier plus whatever
/// else the remote service decided to send, kept untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reservation {
    pub id_reservas_gen: ReservationId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
