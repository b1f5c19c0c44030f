pub mod adapters;
pub mod config;
pub mod di;
pub mod line_server;
