//! Loader settings and configuration path utilities.
//!
//! This module holds the defaults the loader runs with and resolves the
//! configuration file path, expanding shell variables like `~`.

use std::time::Duration;

/// Default path for the configuration document
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default shell used to run directive commands
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Upper bound for all directive commands of a single load, taken together
pub const DEFAULT_DIRECTIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for one configuration load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Shared deadline for every directive in the document, counted from the
    /// start of substitution.
    pub timeout: Duration,
    /// Shell that runs each directive as `<shell> -c <command>`.
    pub shell: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_DIRECTIVE_TIMEOUT,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use plugconf_core::config::get_config_path;
///
/// let default_path = get_config_path(&None);
/// assert_eq!(default_path, "config.yaml");
///
/// let custom_path = get_config_path(&Some("/etc/dns/config.yaml".to_string()));
/// assert_eq!(custom_path, "/etc/dns/config.yaml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yaml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.yaml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        assert_eq!(result, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/dns/config.yaml".to_string());
        let result = get_config_path(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("dns/config.yaml"));
    }

    #[test]
    fn test_default_load_options() {
        let options = LoadOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.shell, "/bin/sh");
    }
}
