//! REST API連携

pub mod vehicles;
