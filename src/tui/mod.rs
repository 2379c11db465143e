//! Terminal user interface for the macro panel.
//!
//! Renders the button grid with ratatui and crossterm and turns clicks and
//! key presses into macro activations.

pub mod app;
pub mod event;
pub mod geometry;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
