use anyhow::{anyhow, bail, Result};
use glossa_build::config::LoggingConfig;
use twyg::{LogLevel, OptsBuilder};

/// Install twyg as the `log` backend.
///
/// `verbose` and `quiet` from the command line win over the configured
/// level.
pub fn init(config: &LoggingConfig, verbose: u8, quiet: bool) -> Result<()> {
    let level = effective_level(&config.level, verbose, quiet)?;

    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .level(level)
        .report_caller(config.report_caller)
        .build()
        .map_err(|e| anyhow!("invalid logging options: {e}"))?;

    twyg::setup(opts).map_err(|e| anyhow!("failed to set up logging: {e}"))?;
    Ok(())
}

fn effective_level(configured: &str, verbose: u8, quiet: bool) -> Result<LogLevel> {
    if quiet {
        return Ok(LogLevel::Error);
    }
    match verbose {
        0 => parse_level(configured),
        1 => Ok(LogLevel::Debug),
        _ => Ok(LogLevel::Trace),
    }
}

fn parse_level(name: &str) -> Result<LogLevel> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        other => bail!("unknown log level: {other}\n\nValid levels: trace, debug, info, warn, error"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(matches!(parse_level("info"), Ok(LogLevel::Info)));
        assert!(matches!(parse_level("WARN"), Ok(LogLevel::Warn)));
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        assert!(matches!(effective_level("info", 1, false), Ok(LogLevel::Debug)));
        assert!(matches!(effective_level("info", 3, false), Ok(LogLevel::Trace)));
        assert!(matches!(effective_level("trace", 0, true), Ok(LogLevel::Error)));
        assert!(matches!(effective_level("warn", 0, false), Ok(LogLevel::Warn)));
    }
}
