// Core business logic module
pub mod monitor;
