pub mod config;
pub mod cors;
pub mod error;
pub mod hello_service;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;
