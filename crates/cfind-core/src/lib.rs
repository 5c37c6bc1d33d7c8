pub mod config;
pub mod logging;

pub mod browser;
pub mod controller;
pub mod lookup;
pub mod render;
pub mod urls;
