//! Example configuration for new deployments.

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::file_handling::save_config;
use crate::plugin_definitions::{Config, LogConfig, PluginDescriptor};

const ENTRY_TAG: &str = "forward_google";

fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut mapping = Mapping::new();
    for (key, value) in entries {
        mapping.insert(Value::from(key), value);
    }
    Value::Mapping(mapping)
}

fn listener(protocol: &str, addr: &str) -> Value {
    mapping([("protocol", Value::from(protocol)), ("addr", Value::from(addr))])
}

/// Builds the example configuration: a `server` listening on loopback over
/// UDP and TCP for IPv4 and IPv6, handing every query to a DoH forwarder.
pub fn build_example_config() -> Config {
    let server = PluginDescriptor {
        tag: "server".to_string(),
        plugin_type: "server".to_string(),
        args: mapping([
            ("entry", Value::Sequence(vec![Value::from(ENTRY_TAG)])),
            (
                "server",
                Value::Sequence(vec![
                    listener("udp", "127.0.0.1:53"),
                    listener("tcp", "127.0.0.1:53"),
                    listener("udp", "[::1]:53"),
                    listener("tcp", "[::1]:53"),
                ]),
            ),
        ]),
    };

    let forward = PluginDescriptor {
        tag: ENTRY_TAG.to_string(),
        plugin_type: "forward".to_string(),
        args: mapping([(
            "upstream",
            Value::Sequence(vec![mapping([
                ("addr", Value::from("https://dns.google/dns-query")),
                (
                    "ip_addr",
                    Value::Sequence(vec![
                        Value::from("8.8.8.8"),
                        Value::from("2001:4860:4860::8888"),
                    ]),
                ),
            ])]),
        )]),
    };

    Config {
        log: LogConfig {
            level: "info".to_string(),
            file: String::new(),
        },
        plugin: vec![server, forward],
        ..Config::default()
    }
}

/// Writes the example configuration to `path`.
///
/// # Errors
///
/// See [`save_config`].
pub fn generate_config(path: &str) -> Result<()> {
    save_config(&build_example_config(), path)
}
