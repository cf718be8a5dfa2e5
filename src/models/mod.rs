pub mod reservation;
pub mod reserva_gen;
