use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provide one.
/// wgpu's internals are noisy at `info`.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger setup for the executable.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives such as `"hexmap_ui=debug,wgpu=warn"`. Wins over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.env_filter.as_deref(), rust_log.as_deref());

        let installed = env_logger::Builder::new()
            .parse_filters(filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .try_init();

        // Another logger may already be installed.
        if installed.is_ok() {
            log::debug!("logging initialized with \"{filter}\"");
        }
    });
}

fn resolve_filter<'a>(configured: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    [configured, rust_log]
        .into_iter()
        .flatten()
        .find(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
}
