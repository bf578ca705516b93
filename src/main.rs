use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use awsprof::{
    commands::{self, ListOptions},
    paths::Paths,
    render::Layout,
    ui::{ColorMode, Ui},
};

#[derive(Parser, Debug)]
#[command(name = "awsprof")]
#[command(about = "List and search the named profiles in your AWS config file")]
struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Show full account ids and access key ids
    #[arg(short = 'l', long)]
    long: bool,

    /// Read this config file instead of ~/.aws/config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Only list profiles whose name or account id contains this text
    search: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("{}", commands::version());
        return Ok(());
    }

    let paths = match cli.config {
        Some(config) => Paths::with_config_file(config),
        None => Paths::new()?,
    };
    let options = ListOptions {
        search: cli.search,
        layout: Layout::from_long_flag(cli.long),
    };

    let mut out = std::io::stdout().lock();
    commands::list(&paths, &options, &mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = Ui::new(cli.color, cli.no_color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui.err(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
