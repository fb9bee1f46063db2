pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod hud;
pub mod input;
pub mod render;
pub mod surface;
