use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "agrocal",
    "agrocal_calendar",
    "agrocal_engine",
    "agrocal_et0",
    "agrocal_fertilizer",
    "agrocal_reference",
];

/// Builds the filter for a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// `RUST_LOG` env var overrides the level if set.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing for the host process.
///
/// Does nothing if a global subscriber is already installed, so embedding
/// applications keep their own.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_every_crate() {
        let filter = filter_for(2).to_string();
        if std::env::var_os("RUST_LOG").is_none() {
            for target in CRATE_TARGETS {
                assert!(filter.contains(&format!("{target}=debug")), "{filter}");
            }
        }
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
