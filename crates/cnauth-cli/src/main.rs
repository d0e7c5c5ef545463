use clap::Parser;
use cnauth_core::{AuthParamError, FormSnapshot};
use tracing_subscriber::EnvFilter;

mod args;
mod render;

use args::Cli;

const INTERNAL_ERROR: i32 = 1;

fn run(cli: Cli) -> anyhow::Result<()> {
    let form = FormSnapshot::load(&cli.form)?;
    let rendered = render::render_all(&form, &cli.prefixes)?;
    println!("{}", render::format_output(&rendered, cli.format)?);
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            e.downcast_ref::<AuthParamError>()
                .map(AuthParamError::exit_code)
                .unwrap_or(INTERNAL_ERROR)
        }
    };
    std::process::exit(code);
}
