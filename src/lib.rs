//! # Libratui - Librarian landing screen
//!
//! A terminal rendition of the Librarian landing page, built with Ratatui.
//! The visible surface is a single hero view: a decorative dot-grid
//! backdrop underneath a centered title, tagline, and code sample.
//!
//! ## Architecture Overview
//!
//! The crate follows the component pattern:
//!
//! - **App** (`app`): event loop turning terminal events into [`action::Action`]s
//! - **Components** (`components`): stateful views driven by actions
//! - **Tui** (`tui`): terminal lifecycle and the tick/render event stream
//! - **Config** (`config`): keybindings layered over embedded defaults
//!
//! The hero view carries exactly two booleans: `mounted`, flipped once by
//! the app loop after the first committed frame, and `dark_mode`, fixed at
//! creation. Nothing renders before the mount signal arrives.
//!
//! ## Modules
//!
//! - [`app`] - Application event loop
//! - [`components`] - UI components (hero, status bar)
//! - [`widgets`] - Stateless render-only widgets
//! - [`theme`] - Dark and light palettes
//! - [`config`] - Configuration management

#![deny(warnings)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod mode;
pub mod text;
pub mod theme;
pub mod tui;
pub mod utils;
pub mod widgets;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
