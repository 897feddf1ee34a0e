pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod model;
pub mod paths;
pub mod roster;
pub mod view;
