//! Robots wandering a rectangular grid, one after another. A robot that walks
//! off the edge is lost and leaves a scent on its last cell; later robots
//! ignore any move that would take them off the grid from a scented cell.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod map;
pub mod parsing;
pub mod robot;
pub mod simulator;

pub use app::App;
pub use error::ParseError;
