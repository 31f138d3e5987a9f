// ABOUTME: Value sources for step configuration.
// ABOUTME: Resolves explicit flags, Actions inputs, and ambient variables in priority order.

/// Where a configuration value can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// A value passed on the command line.
    Flag(Option<String>),
    /// An action input, exposed by the runner as `INPUT_<NAME>`.
    Input(&'static str),
    /// Any other environment variable.
    Env(&'static str),
}

impl ValueSource {
    /// Resolve this source. Blank values count as unset.
    pub fn resolve(&self) -> Option<String> {
        let raw = match self {
            ValueSource::Flag(value) => value.clone(),
            ValueSource::Input(name) => std::env::var(input_var(name)).ok(),
            ValueSource::Env(name) => std::env::var(name).ok(),
        };
        raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

/// Resolve the first source in `sources` that yields a value.
pub fn first_of(sources: &[ValueSource]) -> Option<String> {
    sources.iter().find_map(ValueSource::resolve)
}

/// Environment variable name the runner uses for an action input.
///
/// Spaces become underscores and the name is upper-cased; hyphens are kept,
/// so `environment-url` is read from `INPUT_ENVIRONMENT-URL`.
pub fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_ascii_uppercase())
}

/// Parse an input as a YAML 1.2 core-schema boolean, like the Actions toolkit does.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_var_keeps_hyphens() {
        assert_eq!(input_var("environment-url"), "INPUT_ENVIRONMENT-URL");
        assert_eq!(input_var("job status"), "INPUT_JOB_STATUS");
    }

    #[test]
    fn flag_wins_over_later_sources() {
        temp_env::with_var("INPUT_REF", Some("from-input"), || {
            let value = first_of(&[
                ValueSource::Flag(Some("from-flag".to_string())),
                ValueSource::Input("ref"),
            ]);
            assert_eq!(value.as_deref(), Some("from-flag"));
        });
    }

    #[test]
    fn blank_values_fall_through() {
        temp_env::with_vars(
            [("INPUT_REF", Some("   ")), ("GITHUB_REF", Some("refs/heads/main"))],
            || {
                let value = first_of(&[
                    ValueSource::Flag(None),
                    ValueSource::Input("ref"),
                    ValueSource::Env("GITHUB_REF"),
                ]);
                assert_eq!(value.as_deref(), Some("refs/heads/main"));
            },
        );
    }

    #[test]
    fn booleans_follow_core_schema() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
