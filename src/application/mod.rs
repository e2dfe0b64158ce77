// src/application/mod.rs
pub mod commands;
pub mod dto;
pub mod queries;
pub mod services;
