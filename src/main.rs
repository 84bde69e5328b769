use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};

use identicon::DEFAULT_OUTPUT_DIR;

const USAGE: &str = r#"
    identicon --text "hello world"
    identicon --text "Thy bones are marrowless, thy blood is cold."
    identicon --text "bill.gates@microsoft.com" --dir path/to/folder"#;

#[derive(Parser, Debug)]
#[command(name = "identicon", version, about = "Generate Identicon", override_usage = USAGE)]
struct Cli {
    /// The text to generate identicon from.
    #[arg(short, long)]
    text: String,

    /// The directory were to save the image.
    #[arg(short, long, env = "IDENTICON_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    dir: PathBuf,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.text.is_empty() {
        eprintln!("error: text must not be empty string.\n");
        Cli::command().write_help(&mut std::io::stderr()).ok();
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(path) => {
            println!("file saved @ {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let identicon = identicon::generate(&cli.text)
        .with_context(|| format!("failed to generate identicon for {:?}", cli.text))?;

    log::debug!("{} -> {}", cli.text, identicon.digest);

    identicon
        .save(&cli.dir, &cli.text)
        .with_context(|| format!("failed to save identicon under {}", cli.dir.display()))
}
