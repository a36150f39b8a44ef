// Authentication helpers: token issuance/verification and password hashing

pub mod jwt;
pub mod password;
