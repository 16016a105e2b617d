//! lectio: school timetable backend.
//!
//! A REST service for timetable administration: classroom and time-slot
//! registries plus conflict-checked schedule sessions assigning subject
//! assignments to (classroom, time slot, day, academic year) tuples.
//!
//! The crate is layered as:
//!
//! - [`models`]: domain types with their wire representation
//! - [`scheduling`]: pure conflict detection and interval math
//! - [`db`]: repository traits and the in-memory backend
//! - [`http`]: axum handlers, router, auth and error mapping
//!   (behind the `http-server` feature)
//! - [`config`]: server configuration from env vars and TOML

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod scheduling;
