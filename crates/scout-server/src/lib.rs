//! HTTP surface for Scout: routes, DTOs, error mapping, and shared state.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
