pub mod browse;
pub mod config;
pub mod details;
pub mod fav;
pub mod render;
pub mod search;
