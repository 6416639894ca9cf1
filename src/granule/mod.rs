// public modules
pub mod config;
pub mod core;
pub mod fit;

// private modules
mod setters;
