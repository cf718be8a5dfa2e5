pub mod render;
pub mod reservation_list;
