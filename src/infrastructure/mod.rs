// Infrastructure layer: database bootstrap and repository implementations

pub mod db;
pub mod repositories;
