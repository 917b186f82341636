// HTTP handlers, one module per concern.

pub mod account;
pub mod verify;
