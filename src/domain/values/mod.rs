pub mod operation_state;
pub mod sentiment;
pub mod ticker;
pub mod timestamp;
