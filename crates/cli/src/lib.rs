//! Plugconf CLI Library
//!
//! This crate provides the command-line front end for plugconf. It checks a
//! configuration by loading it (running every `${{ ... }}` directive), prints
//! the resolved document, or writes an example configuration.
//!
//! # Examples
//!
//! ```bash
//! # Load config.yaml and list its plugins
//! plugconf
//!
//! # Print the fully resolved configuration
//! plugconf -c /etc/dns/config.yaml --print
//!
//! # Allow directives ten seconds in total
//! plugconf -c /etc/dns/config.yaml -t 10
//!
//! # Write an example configuration
//! plugconf --gen config.yaml
//! ```

pub mod cli_args;
pub mod report;
