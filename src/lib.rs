//! Employees API Library
//!
//! Core functionality for the employee records API: domain entities,
//! repositories, authentication helpers, and the HTTP layer.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;
