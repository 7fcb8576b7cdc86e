use tracing::level_filters::LevelFilter;
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::FmtSubscriber;

/// Default filter enabling only the given crates, at `trace` when verbose and `info` otherwise.
pub fn default_log_filter(verbose: bool, crates: &[&str]) -> String {
    let level = if verbose { "trace" } else { "info" };

    let mut filter = String::from("none,hyper=off");
    for name in crates {
        filter.push_str(&format!(",{name}={level}"));
    }
    filter
}

/// Installs the global subscriber. Logs go to stderr, `RUST_LOG` overrides the default filter.
pub fn init_logging(
    clap_verbosity: &clap_verbosity_flag::Verbosity,
    crates: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let verbose = clap_verbosity.log_level_filter().as_trace() >= LevelFilter::DEBUG;
    let default_log_filter = default_log_filter(verbose, crates);

    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter)),
        )
        .with_writer(std::io::stderr)
        .finish();

    Ok(tracing::subscriber::set_global_default(subscriber)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_enables_only_listed_crates() {
        assert_eq!(
            default_log_filter(false, &["deploy_udc", "devnet_utils"]),
            "none,hyper=off,deploy_udc=info,devnet_utils=info"
        );
        assert_eq!(
            default_log_filter(true, &["find_devnet_accounts"]),
            "none,hyper=off,find_devnet_accounts=trace"
        );
    }

    #[test]
    fn filter_is_valid_for_env_filter() {
        let filter = default_log_filter(true, &["deploy_udc", "devnet_utils"]);
        assert!(tracing_subscriber::EnvFilter::try_new(filter).is_ok());
    }
}
