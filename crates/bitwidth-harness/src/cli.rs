use std::io::{BufRead, Write};
use std::path::PathBuf;

use bitwidth::core::logging::{LogFormat, init_subscriber};
use bitwidth::{BitWidth, WidthAttribute, WidthConfig};
use clap::Parser;

use crate::error::Result;
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "bitwidth-harness",
    about = "Drive a width selector from stdin, one input per line",
    version
)]
pub struct Cli {
    /// Largest width the selector offers.
    #[arg(long = "max-width")]
    pub max_width: Option<u32>,

    /// Width the editor opens with.
    #[arg(long, default_value = "8")]
    pub initial: String,

    /// TOML or JSON width config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long = "json-logs")]
    pub json_logs: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Plain
    });
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(cli, stdin.lock(), stdout.lock())
}

pub fn run(cli: Cli, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => WidthConfig::from_file(path)?,
        None => WidthConfig::from_env(),
    };
    if let Some(max_width) = cli.max_width {
        config.max_width = max_width;
    }
    let initial = BitWidth::parse(&cli.initial)?;

    let attr = WidthAttribute::with_range("width", 1, config.effective_max_width())
        .with_config(config);
    let mut session = Session::open(&attr, initial);
    tracing::info!(
        message = "harness.open",
        initial = initial.width(),
        choices = session.model().len()
    );

    writeln!(output, "{}", session.render())?;
    for line in input.lines() {
        let line = line?;
        if !session.apply_line(&line) {
            break;
        }
        writeln!(output, "{}", session.render())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;

    fn cli(initial: &str) -> Cli {
        Cli {
            max_width: Some(64),
            initial: initial.to_string(),
            config: None,
            json_logs: false,
        }
    }

    fn run_lines(cli: Cli, lines: &str) -> Result<String> {
        let mut out = Vec::new();
        run(cli, lines.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn prints_list_after_each_line() {
        let out = run_lines(cli("8"), "13\n1000\n").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 [8] 16 24 32 40 48 56 64");
        assert_eq!(lines[1], "[13] 1 8 16 24 32 40 48 56 64");
        assert_eq!(lines[2], "13 1 8 16 24 32 40 48 56 [64]");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_lines(cli("8"), ":quit\n13\n").unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn bad_initial_width_is_reported() {
        let err = run_lines(cli("-3"), "").unwrap_err();
        assert!(matches!(err, HarnessError::Width(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let mut args = cli("8");
        args.config = Some(PathBuf::from("/definitely/not/here.toml"));
        let err = run_lines(args, "").unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }
}
