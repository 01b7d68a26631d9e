//! Object metadata shared by all API groups.

pub mod v1;
