//! CLI commands

pub mod audit;
pub mod check;
pub mod demo;
pub mod generate;
pub mod models;
