//! API groups served under `/api` and `/apis`.

pub mod apps;
pub mod batch;
pub mod core;
pub mod networking;
