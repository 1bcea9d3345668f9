//! Tabletop RPG catalog browser.
//!
//! This crate loads a JSON catalog of game systems and supplements, groups
//! the entries by base system, and drives a three-level drill-down
//! (families → versions → version detail) with back-navigation.
//!
//! The binary `rpgshelf` prints the grouped catalog or the markup of any view.

pub mod catalog;
pub mod config;
pub mod error;
pub mod grouper;
pub mod history;
pub mod logging;
pub mod model;
pub mod render;
pub mod session;
pub mod version;
pub mod view;

// Optional desktop viewer behind the `egui` feature flag. It draws the same
// session pages with native widgets instead of HTML.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use error::{CatalogError, Result};
pub use session::{Screen, Session};
