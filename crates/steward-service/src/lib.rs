//! # steward-service
//!
//! Business layer: guild and configuration services, health aggregation,
//! the dashboard broadcast stream, and DTOs.

pub mod dto;
pub mod services;
