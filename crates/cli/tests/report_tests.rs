#[cfg(test)]
mod tests {
    use clap::Parser;
    use plugconf_cli::cli_args::Args;
    use plugconf_cli::report::{plugins_by_type, summarize};
    use plugconf_core::file_handling::load_config_with;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plugins_grouped_by_first_seen_type() {
        let yaml_content = r#"
plugin:
  - tag: forward_a
    type: forward
  - tag: cache
    type: cache
  - tag: forward_b
    type: forward
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let args = Args::parse_from(["plugconf", "-c", temp_path, "--shell", "/bin/sh"]);
        let config = load_config_with(temp_path, &args.load_options()).unwrap();

        let groups = plugins_by_type(&config);
        let types: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(types, vec!["forward", "cache"]);
        assert_eq!(groups["forward"], vec!["forward_a", "forward_b"]);

        assert!(summarize(&config).ends_with("Types: forward x2, cache x1"));
    }

    #[test]
    fn test_summary_of_directive_tags() {
        let yaml_content = "plugin:\n  - tag: ${{ echo resolved }}\n    type: noop\n";
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let args = Args::parse_from(["plugconf", "--shell", "/bin/sh", "-t", "5"]);
        let config = load_config_with(temp_path, &args.load_options()).unwrap();

        assert_eq!(
            summarize(&config),
            "Plugins:\n0: resolved (noop)\nTypes: noop x1"
        );
    }
}
