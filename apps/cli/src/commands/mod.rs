//! # CLI Commands
//!
//! ```text
//! commands/
//! ├── mod.rs     ◄─── You are here (exports)
//! ├── quote.rs   ◄─── `dopc quote`: price one order
//! └── config.rs  ◄─── `dopc config`: show effective configuration
//! ```
//!
//! Each command loads what it needs from the global `--config` path and
//! returns the process exit status.

pub mod config;
pub mod quote;
