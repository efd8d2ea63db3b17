//! Human-readable summary of a loaded configuration.

use indexmap::IndexMap;
use itertools::Itertools;
use plugconf_core::plugin_definitions::Config;

/// Plugin tags grouped by type, in order of each type's first appearance.
pub fn plugins_by_type(config: &Config) -> IndexMap<&str, Vec<&str>> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for plugin in &config.plugin {
        groups
            .entry(plugin.plugin_type.as_str())
            .or_default()
            .push(plugin.tag.as_str());
    }
    groups
}

/// Renders the plugin list in initialization order, followed by a per-type count.
pub fn summarize(config: &Config) -> String {
    if config.plugin.is_empty() {
        return "No plugins configured.".to_string();
    }

    let plugins = config
        .plugin
        .iter()
        .enumerate()
        .map(|(index, plugin)| format!("{index}: {plugin}"))
        .join("\n");

    let types = plugins_by_type(config)
        .iter()
        .map(|(plugin_type, tags)| format!("{plugin_type} x{}", tags.len()))
        .join(", ");

    format!("Plugins:\n{plugins}\nTypes: {types}")
}
