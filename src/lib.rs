// src/lib.rs
//! CRUD service for articles over PostgreSQL.
//!
//! Requests pass through a fixed middleware chain (request context, access
//! logging, JSON enforcement, panic recovery) before reaching the handlers,
//! which call the application services, which call the repositories. Every
//! layer receives the request's [`context::RequestContext`] explicitly.
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
