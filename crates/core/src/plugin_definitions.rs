use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

/// One named, typed plugin instance.
///
/// `args` is handed to the plugin untouched; its shape depends on `plugin_type`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PluginDescriptor {
    pub tag: String,
    #[serde(rename = "type")]
    pub plugin_type: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub args: Value,
}

impl Display for PluginDescriptor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.tag, self.plugin_type)
    }
}

/// Top level configuration document.
///
/// Plugin order is initialization order and survives decode/encode.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub library: Vec<String>,
    pub plugin: Vec<PluginDescriptor>,
    pub include: Vec<String>,
}

impl Config {
    /// First plugin carrying `tag`. Tags are not checked for uniqueness here.
    pub fn plugin(&self, tag: &str) -> Option<&PluginDescriptor> {
        self.plugin.iter().find(|plugin| plugin.tag == tag)
    }
}
