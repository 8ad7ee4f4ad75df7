pub mod coordinator;
pub mod operation_slot;
