//! Diagnostic log filtering.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level applied when `RUST_LOG` names no level of its own.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Filter built from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].
pub fn env_filter() -> EnvFilter {
    builder().from_env_lossy()
}

/// Filter built from an explicit directive string, with the same fallback.
pub fn filter_from(directives: &str) -> EnvFilter {
    builder().parse_lossy(directives)
}

fn builder() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(DEFAULT_LEVEL.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directives_use_default_level() {
        assert_eq!(filter_from("").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_global_level_is_kept() {
        assert_eq!(filter_from("info").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter_from("error").max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_target_directive_is_kept() {
        let filter = filter_from("paracurve_cli=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
