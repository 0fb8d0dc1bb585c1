//! Global `tracing` subscriber setup.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Directive used when the caller passes none or one that does not parse.
pub const DEFAULT_LOG_DIRECTIVE: &str = "glarea=info";

/// Install a fmt subscriber filtered by `RUST_LOG` plus `directive`.
///
/// Returns `false` when a global subscriber was already installed, so
/// calling this more than once is harmless.
pub fn init_logging(directive: Option<&str>) -> bool {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let parsed: Directive = match directive.parse::<Directive>() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("invalid log directive '{directive}': {e}, using {DEFAULT_LOG_DIRECTIVE}");
            match DEFAULT_LOG_DIRECTIVE.parse::<Directive>() {
                Ok(d) => d,
                Err(_) => return false,
            }
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(parsed))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized ({directive})");
    }
    installed
}

/// Map a config-level name (`"info"`, `"warn"`, ...) to a crate directive.
pub fn directive_for_level(level: &str) -> String {
    format!("glarea={}", level.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_noop() {
        let _ = init_logging(Some("glarea=debug"));
        assert!(!init_logging(None));
    }

    #[test]
    fn bad_directive_does_not_panic() {
        let _ = init_logging(Some("glarea=[[["));
    }

    #[test]
    fn directive_for_level_lowercases() {
        assert_eq!(directive_for_level("WARN"), "glarea=warn");
        assert_eq!(directive_for_level("debug"), "glarea=debug");
    }
}
