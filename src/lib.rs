#![forbid(unsafe_code)]

pub mod cache;
pub mod cli;
pub mod cms;
pub mod config;
pub mod format;
pub mod inspect;
pub mod logging;
pub mod pages;
pub mod render;
pub mod server;
pub mod ui;
pub mod youtube;
