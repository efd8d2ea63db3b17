//! Reading and writing configuration files.
//!
//! Loading is read, then directive substitution, then decoding. Any failure
//! along the way aborts the load without a partial configuration.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::codec;
use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::execution::{CommandRunner, ShellRunner};
use crate::interpolation;
use crate::plugin_definitions::Config;

fn read_file(file_description: &str, path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads a configuration with the default shell and a five second directive
/// deadline.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A directive command fails or the deadline elapses
/// - The substituted document is not a valid configuration
///
/// # Examples
///
/// ```no_run
/// use plugconf_core::file_handling::load_config;
///
/// let config = load_config("config.yaml")?;
/// for plugin in &config.plugin {
///     println!("Plugin: {}", plugin);
/// }
/// # Ok::<(), plugconf_core::error::Error>(())
/// ```
pub fn load_config(path: &str) -> Result<Config> {
    load_config_with(path, &LoadOptions::default())
}

/// Loads a configuration, running directives with the shell and deadline from
/// `options`.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with(path: &str, options: &LoadOptions) -> Result<Config> {
    load_config_with_runner(path, &ShellRunner::new(options.shell.as_str()), options.timeout)
}

/// Loads a configuration, resolving directives through `runner`.
///
/// The deadline of `timeout` starts before the file is read.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with_runner(
    path: &str,
    runner: &impl CommandRunner,
    timeout: Duration,
) -> Result<Config> {
    let deadline = Instant::now() + timeout;

    let raw = read_file("config", path)?;
    debug!("Read {} bytes from `{}`", raw.len(), path);

    let document = interpolation::substitute_until(&raw, runner, deadline)?;

    let config = codec::decode(&document).map_err(|e| match e {
        Error::Format(original) => Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            path.to_string(),
            original,
        ),
        other => other,
    })?;

    if config.plugin.is_empty() {
        warn!("No plugins were found in `{}`", path);
    }
    info!("Loaded {} plugin(s) from `{}`", config.plugin.len(), path);

    Ok(config)
}

/// Writes `config` to `path`, creating or truncating the file.
///
/// The file is closed on every path. A failed encode can leave a partially
/// written file behind.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or written to
/// - Serialization to YAML fails
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;
    let mut writer = BufWriter::new(file);

    codec::encode_to_writer(&mut writer, config).map_err(|e| match e {
        Error::Format(original) => Error::yaml_error(
            "writing".to_string(),
            "config".to_string(),
            path.to_string(),
            original,
        ),
        other => other,
    })?;

    writer
        .flush()
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

    info!("Wrote {} plugin(s) to `{}`", config.plugin.len(), path);
    Ok(())
}
