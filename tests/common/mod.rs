pub mod stats_backend;
pub mod zone_server;
