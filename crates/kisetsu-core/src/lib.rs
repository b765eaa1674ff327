pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod models;
pub mod paginate;
