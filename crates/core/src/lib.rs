//! Plugconf Core Library
//!
//! This crate loads and writes the YAML configuration of a plugin-driven
//! service. A configuration lists named, typed plugin instances together with
//! a few top level settings.
//!
//! # Key Features
//!
//! - **Directives**: `${{ command }}` anywhere in the document is replaced by
//!   the command's output before decoding, with one shared deadline per load
//! - **Typed Model**: Plugin descriptors keep their order and carry free-form
//!   `args` for the plugin to interpret
//! - **Round Trips**: Configurations encode back to stable, two-space indented YAML
//! - **Example Generation**: A ready-to-run example configuration for new deployments
//!
//! # Examples
//!
//! Loading a configuration file:
//!
//! ```no_run
//! use plugconf_core::file_handling::load_config;
//!
//! let config = load_config("config.yaml")?;
//! for plugin in &config.plugin {
//!     println!("Plugin: {}", plugin);
//! }
//! # Ok::<(), plugconf_core::error::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod generator;
pub mod interpolation;
pub mod plugin_definitions;
