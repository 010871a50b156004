//! Process setup: configuration from the environment and log output.

use sortvis_coord::CoordinatorConfig;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Pause between forwarded steps, in milliseconds.
pub const STEP_DELAY_VAR: &str = "SORTVIS_STEP_DELAY_MS";

/// Upper bound on the counting sort value span.
pub const MAX_COUNTING_RANGE_VAR: &str = "SORTVIS_MAX_COUNTING_RANGE";

/// Build the coordinator config from the process environment.
pub fn config_from_env() -> CoordinatorConfig {
    config_from_vars(|key| std::env::var(key).ok())
}

/// Build the coordinator config from an arbitrary variable lookup.
///
/// Unparseable values are logged and the default is kept.
pub fn config_from_vars(get: impl Fn(&str) -> Option<String>) -> CoordinatorConfig {
    let mut config = CoordinatorConfig::default();

    if let Some(raw) = get(STEP_DELAY_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(0) => config.step_delay = None,
            Ok(ms) => config.step_delay = Some(Duration::from_millis(ms)),
            Err(e) => tracing::warn!(var = STEP_DELAY_VAR, value = %raw, error = %e, "sortvis.config.ignored"),
        }
    }
    if let Some(raw) = get(MAX_COUNTING_RANGE_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(limit) if limit > 0 => config.max_counting_range = limit,
            Ok(_) => tracing::warn!(var = MAX_COUNTING_RANGE_VAR, value = %raw, "sortvis.config.ignored"),
            Err(e) => tracing::warn!(var = MAX_COUNTING_RANGE_VAR, value = %raw, error = %e, "sortvis.config.ignored"),
        }
    }
    config
}

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `info`. Stdout is reserved for protocol lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_vars() {
        let config = config_from_vars(vars(&[]));
        assert_eq!(config.step_delay, None);
        assert_eq!(config.max_counting_range, 1_000_000);
    }

    #[test]
    fn reads_both_vars() {
        let config = config_from_vars(vars(&[
            (STEP_DELAY_VAR, "25"),
            (MAX_COUNTING_RANGE_VAR, " 500 "),
        ]));
        assert_eq!(config.step_delay, Some(Duration::from_millis(25)));
        assert_eq!(config.max_counting_range, 500);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config_from_vars(vars(&[
            (STEP_DELAY_VAR, "soon"),
            (MAX_COUNTING_RANGE_VAR, "0"),
        ]));
        assert_eq!(config.step_delay, None);
        assert_eq!(config.max_counting_range, 1_000_000);
    }
}
