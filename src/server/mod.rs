//! Read-only fixture server.
//!
//! Serves the fixture catalog over HTTP so a front end can run against canned data
//! instead of the real backend. Endpoint paths and error bodies mirror the backend's read
//! endpoints; nothing here writes, and every response is built from a fresh copy of the
//! catalog.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and OpenAPI annotations
//! - **Service Layer** (`service/`) - Lookups over the fixture catalog
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Listener binding and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
