pub mod assembler;
pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod parser;
pub mod summary;
pub mod utils;
