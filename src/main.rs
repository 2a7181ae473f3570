use anyhow::Result;
use clap::Parser;
use hello_sum::{cli::Cli, numbers::Numbers, report::DEFAULT_GREETING, runner};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // The report is exactly two lines
    if let Some(greeting) = &args.greeting {
        if greeting.contains('\n') {
            anyhow::bail!("Invalid value for --greeting: must be a single line");
        }
    }

    init_tracing(args.debug);

    let numbers = match &args.numbers {
        Some(list) => Numbers::parse(list)?,
        None => Numbers::default(),
    };

    let config = runner::RunConfig {
        greeting: args.greeting.unwrap_or_else(|| DEFAULT_GREETING.to_string()),
        numbers,
        output_format: args.format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::run(&config, &mut out)?;

    Ok(())
}
