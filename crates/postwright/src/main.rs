use clap::Parser;
use postwright::cli::{Cli, run};
use postwright::{CliConfig, observability::init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(cli.output, cli.strict);
    init_logging(&config);

    tracing::debug!(command = ?cli.command, "Dispatching command");
    let verdict = run(cli.command, &config, cli.quiet)?;

    let code = verdict.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
