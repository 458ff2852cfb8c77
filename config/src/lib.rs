//! # Config Crate
//!
//! Centralized configuration constants for the sprite mesh pipeline.
//! Fill thresholds, tolerances and host defaults are defined here so the
//! mesh builder never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, EMPTY_FILL_THRESHOLD, FULL_FILL_THRESHOLD};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.empty_fill_threshold, EMPTY_FILL_THRESHOLD);
//! assert!(cfg.is_full_fill(FULL_FILL_THRESHOLD));
//! assert!(cfg.is_empty_fill(0.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Plain Rust, usable from any host
//! - **Validated**: `GlobalConfig::new` rejects inconsistent settings

pub mod constants;
