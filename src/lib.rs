pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod router;
pub mod store;
pub mod ui;
pub mod views;
