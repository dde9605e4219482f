//! # komodo
//!
//! State machines behind the Komodo landing page.
//!
//! The page itself (`komodo-landing`) is a Leptos CSR app. Everything that
//! makes a decision lives here, free of DOM types, so it can be tested on
//! the host:
//!
//! - [`commands`] - command registry: classify a line, produce canned text
//! - [`terminal`] - simulated terminal log, history recall, auto-scroll policy
//! - [`scroll`] - scroll-progress controllers for the showcase and the hero
//! - [`showcase`] - feature showcase content
//! - [`config`] - `komodo.toml` settings
//!
//! ## Quick Start
//!
//! ```rust
//! use komodo::terminal::{HistoryDirection, Terminal};
//!
//! let mut term = Terminal::new("Welcome to Komodo! Type komodo for help.");
//! term.submit(r#"komodo install "train a model""#);
//! assert!(term.log()[1].output.contains("train a model"));
//!
//! term.navigate_history(HistoryDirection::Older);
//! assert_eq!(term.pending(), r#"komodo install "train a model""#);
//! ```
//!
//! ```rust
//! use komodo::scroll::{SectionGeometry, ShowcaseProgress};
//!
//! // Three features pinned over 3 viewports of 800px.
//! let mut showcase = ShowcaseProgress::new(3);
//! showcase.on_scroll(SectionGeometry::new(-1200.0, 2400.0, 800.0));
//! assert_eq!(showcase.active_index(), 2);
//! ```
//!
//! ---
//!
//! Developed with 🦎 by The Komodo Team (c)2025

pub mod commands;
pub mod config;
pub mod scroll;
pub mod showcase;
pub mod terminal;

pub use commands::{Command, Resolution};
pub use config::{ConfigError, LandingConfig};
pub use terminal::{HistoryDirection, LogEntry, Terminal};
