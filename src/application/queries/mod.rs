// src/application/queries/mod.rs
pub mod articles;
