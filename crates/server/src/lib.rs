pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;
