//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or heavy logic, just data, defaults and simple helpers.

pub mod config;
pub mod constants;
