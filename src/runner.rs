//! Builds the report and writes it to an output sink

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::numbers::Numbers;
use crate::report::{Report, DEFAULT_GREETING};
use std::io::Write;
use tracing::{debug, info};

/// Settings for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub greeting: String,
    pub numbers: Numbers,
    pub output_format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            numbers: Numbers::default(),
            output_format: OutputFormat::Text,
        }
    }
}

/// Write the greeting line followed by the sum line to `out`
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    debug!(
        count = config.numbers.len(),
        format = ?config.output_format,
        "building report"
    );

    let report = Report::from_numbers(config.greeting.as_str(), &config.numbers)?;
    info!(sum = report.sum, "sum computed");

    let rendered = match config.output_format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.render_json()?,
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn run_to_string(config: &RunConfig) -> Result<String> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_run_output() {
        let output = run_to_string(&RunConfig::default()).unwrap();
        assert_eq!(output, "Hello Go World!\nSum: 15\n");
    }

    #[test]
    fn test_default_run_writes_two_lines() {
        let output = run_to_string(&RunConfig::default()).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_custom_numbers() {
        let config = RunConfig {
            numbers: Numbers::from_slice(&[10, -3, 7]),
            ..RunConfig::default()
        };
        let output = run_to_string(&config).unwrap();
        assert_eq!(output, "Hello Go World!\nSum: 14\n");
    }

    #[test]
    fn test_empty_numbers() {
        let config = RunConfig {
            numbers: Numbers::new(vec![]),
            ..RunConfig::default()
        };
        let output = run_to_string(&config).unwrap();
        assert_eq!(output, "Hello Go World!\nSum: 0\n");
    }

    #[test]
    fn test_json_run() {
        let config = RunConfig {
            output_format: OutputFormat::Json,
            ..RunConfig::default()
        };
        let output = run_to_string(&config).unwrap();
        assert_eq!(output, "{\"greeting\":\"Hello Go World!\",\"sum\":15}\n");
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let config = RunConfig {
            numbers: Numbers::from_slice(&[i64::MAX, 1]),
            ..RunConfig::default()
        };
        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(err, Error::Overflow { index: 1 }));
        assert!(out.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = run(&RunConfig::default(), &mut BrokenSink).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
