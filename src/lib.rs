pub mod api;
pub mod config;
pub mod db;
pub mod geo;
pub mod schema;
pub mod stations;
