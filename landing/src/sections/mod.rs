// Landing page sections
// Developed with 🦎 by The Komodo Team (c)2025

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v1.0.0";

/// KOMODO wordmark, one entry of [`LINE_COLORS`] per line.
pub const KOMODO_ART: &str = "\
██╗  ██╗ ██████╗ ███╗   ███╗ ██████╗ ██████╗  ██████╗
██║ ██╔╝██╔═══██╗████╗ ████║██╔═══██╗██╔══██╗██╔═══██╗
█████╔╝ ██║   ██║██╔████╔██║██║   ██║██║  ██║██║   ██║
██╔═██╗ ██║   ██║██║╚██╔╝██║██║   ██║██║  ██║██║   ██║
██║  ██╗╚██████╔╝██║ ╚═╝ ██║╚██████╔╝██████╔╝╚██████╔╝
╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝ ╚═════╝ ╚═════╝  ╚═════╝ ";

/// Top-to-bottom green gradient for the wordmark.
pub const LINE_COLORS: [&str; 6] = [
    "#d4f5d4", "#c5eec5", "#b6e7b6", "#a7e0a7", "#98d998", "#89d289",
];

mod console_banner;
mod features;
mod footer;
mod hero;
mod statement;
mod terminal;
mod what_is;

pub use console_banner::ConsoleBanner;
pub use features::FeatureShowcase;
pub use footer::Footer;
pub use hero::Hero;
pub use statement::Statement;
pub use terminal::{KomodoTerminal, TerminalDots};
pub use what_is::WhatIs;

