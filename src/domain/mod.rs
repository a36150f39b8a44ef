// Domain layer module exports
// Entities and repository contracts, independent of infrastructure

pub mod employee;
pub mod repositories;
