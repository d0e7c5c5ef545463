use clap::Parser;
use cnauth_core::FieldPrefix;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cnauth",
    version,
    about = "Render TeamForge authentication-override parameters from a form snapshot"
)]
pub struct Cli {
    /// Form snapshot file (YAML or JSON)
    #[arg(short, long, env = "CNAUTH_FORM")]
    pub form: PathBuf,

    /// Credential field prefix; repeat for several forms on the same page
    #[arg(short, long = "prefix", required = true)]
    pub prefixes: Vec<FieldPrefix>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
