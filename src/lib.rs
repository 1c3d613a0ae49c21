pub mod app;
pub mod camera;
pub mod cell;
pub mod config;
pub mod display;
pub mod editor;
pub mod events;
pub mod grid;
pub mod io;
pub mod rules;
