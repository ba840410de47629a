pub mod app;
pub mod config;
pub mod logging;
pub mod nav;
pub mod version;
