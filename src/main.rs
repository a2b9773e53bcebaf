use clap::Parser;
use netrc_config_rs::{expand_tilde, LoadOptions, Netrc};
use std::process::ExitCode;

/// Check that a .netrc file is safe and parses cleanly
#[derive(Parser, Debug)]
#[command(name = "netrc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the netrc file (default: ~/.netrc)
    #[arg(env = "NETRC")]
    path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print nothing on success
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let opts = LoadOptions {
        path: cli.path.as_deref().map(expand_tilde),
        ..Default::default()
    };

    match Netrc::load_with_options(opts) {
        Ok(netrc) => {
            log::info!("{} machine(s) in {}", netrc.len(), netrc.path().display());
            if !cli.quiet {
                println!(".netrc file parsed without error");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
