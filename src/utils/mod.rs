pub mod database;
pub mod error;
pub mod ownership;
pub mod password;
pub mod sanitize;
pub mod validation;
