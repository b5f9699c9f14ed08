//! Tracing subscriber setup
//!
//! Logs go to stderr so they never mix with rendered output on stdout.
//! The filter comes from `SYNTAXGUARD_LOG_LEVEL` and defaults to errors only.

use crate::config::LOG_LEVEL_ENV_VAR;
use anyhow::Result;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const QUIET_DEPENDENCIES: &[&str] = &[
    "reqwest=warn",
    "hyper=warn",
    "hyper_util=warn",
    "rustls=warn",
    "tokio_rustls=warn",
    "arboard=warn",
];

/// Build the log filter from the environment
pub fn build_env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_env(LOG_LEVEL_ENV_VAR);
    for directive in QUIET_DEPENDENCIES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber; a second call is a no-op
pub fn init_tracing_subscriber() -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter()?)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_should_build_with_dependency_directives() {
        assert!(build_env_filter().is_ok());
    }

    #[test]
    fn init_tracing_subscriber_should_tolerate_repeated_calls() {
        init_tracing_subscriber().unwrap();
        init_tracing_subscriber().unwrap();
    }
}
