//! HTTP layer for the HireHub backend: DTOs, routes, middleware and the
//! application factory. The binary in `main.rs` wires real backends into it;
//! integration tests wire in-memory ones.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
