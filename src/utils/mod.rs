// src/utils/mod.rs
pub mod formatter;
