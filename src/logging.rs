use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the log filter from a `RUST_LOG`-style directive string.
pub fn filter_from(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).with_context(|| format!("parse log filter {directives:?}"))
}

/// Installs the global subscriber: compact lines on stderr, no targets.
pub fn init() -> anyhow::Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    let filter = filter_from(directives.as_deref()).context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_directives_use_default() {
        assert_eq!(filter_from(None).unwrap().to_string(), DEFAULT_FILTER);
        assert_eq!(filter_from(Some("  ")).unwrap().to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn directives_are_honoured() {
        let filter = filter_from(Some("genlatam=debug")).unwrap();
        assert_eq!(filter.to_string(), "genlatam=debug");
    }

    #[test]
    fn invalid_directives_are_errors() {
        assert!(filter_from(Some("genlatam=notalevel")).is_err());
    }
}
