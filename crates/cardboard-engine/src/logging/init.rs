use std::io::Write;
use std::sync::Once;

/// Tag used by the platform log of the native activity.
pub const DEFAULT_TAG: &str = "native-activity";

/// How the process logger is set up.
///
/// An explicit `env_filter` (`env_logger` directives such as
/// "cardboard_engine=debug,wgpu=warn") wins over `RUST_LOG`; with
/// neither, everything at info and above is shown. With a `tag`, each line
/// reads `<timestamp> <level> <tag>: <message>` like the platform log.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub tag: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            tag: Some(DEFAULT_TAG.to_string()),
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
        {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(config.write_style);

        if let Some(tag) = config.tag {
            builder.format(move |buf, record| {
                let timestamp = buf.timestamp_millis();
                writeln!(buf, "{timestamp} {}", tagged_line(&tag, record))
            });
        }

        // An embedding host may have installed its own logger already.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

fn tagged_line(tag: &str, record: &log::Record<'_>) -> String {
    format!("{:<5} {tag}: {}", record.level(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_line_carries_level_tag_and_message() {
        let line = tagged_line(
            DEFAULT_TAG,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("sensor gone"))
                .build(),
        );
        assert_eq!(line, "WARN  native-activity: sensor gone");
    }

    #[test]
    fn repeated_init_is_ignored() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            tag: None,
            ..Default::default()
        });
    }
}
