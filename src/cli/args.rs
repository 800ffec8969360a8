use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the bank account demonstration
#[derive(Parser, Debug)]
#[command(name = "bank-accounts")]
#[command(about = "Run the bank account demonstration", long_about = None)]
pub struct CliArgs {
    /// Log filter directive for diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter, e.g. 'debug' or 'bank_accounts=info' (default: RUST_LOG, then 'warn')"
    )]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the log filter directive
    ///
    /// The `--log-level` flag wins over `RUST_LOG`, which wins over
    /// [`DEFAULT_LOG_FILTER`].
    pub fn log_directive(&self) -> String {
        resolve_directive(
            self.log_level.clone(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        )
    }

    /// Build the tracing filter from the resolved directive
    ///
    /// An invalid directive falls back to [`DEFAULT_LOG_FILTER`] with a
    /// warning on stderr, since no subscriber is installed yet.
    pub fn env_filter(&self) -> EnvFilter {
        let directive = self.log_directive();
        EnvFilter::try_new(&directive).unwrap_or_else(|error| {
            eprintln!(
                "Warning: invalid log filter '{}' ({}), using '{}'",
                directive, error, DEFAULT_LOG_FILTER
            );
            EnvFilter::new(DEFAULT_LOG_FILTER)
        })
    }
}

/// Pick the first available log directive: flag, then environment, then default
fn resolve_directive(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_options(&["program"], None)]
    #[case::level(&["program", "--log-level", "debug"], Some("debug"))]
    #[case::directive(&["program", "--log-level", "bank_accounts=info"], Some("bank_accounts=info"))]
    fn test_log_level_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level.as_deref(), expected);
    }

    #[rstest]
    #[case::flag_and_env(Some("trace"), Some("info"), "trace")]
    #[case::flag_only(Some("trace"), None, "trace")]
    #[case::env_only(None, Some("bank_accounts=info"), "bank_accounts=info")]
    #[case::neither(None, None, "warn")]
    fn test_resolve_directive(
        #[case] flag: Option<&str>,
        #[case] env: Option<&str>,
        #[case] expected: &str,
    ) {
        let resolved = resolve_directive(flag.map(String::from), env.map(String::from));
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_flag_builds_filter() {
        let parsed = CliArgs::try_parse_from(["program", "--log-level", "trace"]).unwrap();
        assert_eq!(parsed.log_directive(), "trace");
        assert_eq!(parsed.env_filter().to_string(), "trace");
    }

    #[test]
    fn test_invalid_directive_falls_back_to_default() {
        let parsed = CliArgs::try_parse_from(["program", "--log-level", "bank_accounts=loud"]).unwrap();
        assert_eq!(parsed.env_filter().to_string(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    #[case::positional_argument(&["program", "input.csv"])]
    #[case::unknown_flag(&["program", "--strategy", "sync"])]
    #[case::missing_value(&["program", "--log-level"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
