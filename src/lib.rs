//! Collatz sequence visualizer.
//!
//! The library holds the sequence generator, the radial bubble layout and a
//! [`session::Session`] controller that turns user commands into draw
//! instructions. The interactive window built on egui lives behind the `egui`
//! feature flag.

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod layout;
pub mod sequence;
pub mod session;

#[cfg(feature = "egui")]
pub mod egui_app;
