//! Core (`v1`) API group.

pub mod v1;
