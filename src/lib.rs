// src/lib.rs
pub mod app;
pub mod client;
pub mod listing;
pub mod ui;
pub mod utils;
