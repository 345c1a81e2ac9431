use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use romgen::{GenerateOptions, Rom, DEFAULT_PATH};

#[derive(Parser, Debug)]
#[command(version, about = "Writes simulated machine-code ROM images", long_about = None)]
struct Cli {
    /// Log progress to stderr (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a 0x180-byte image of random bytes (the default command)
    Generate(GenerateArgs),
    /// Print the contents of an existing image
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output file
    #[arg(default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Seed for a reproducible image
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        let GenerateOptions { path, seed } = GenerateOptions::default();
        Self { path, seed }
    }
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        GenerateOptions {
            path: args.path,
            seed: args.seed,
        }
    }
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Image to read
    path: PathBuf,

    /// List big-endian 32-bit words instead of a hex dump
    #[arg(short, long)]
    words: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => {
            let options = GenerateOptions::from(args);
            options
                .run()
                .with_context(|| format!("failed to generate '{}'", options.path.display()))?;
            println!(
                "Machine code file '{}' generated successfully.",
                options.path.display()
            );
        }
        Commands::Inspect(args) => {
            let rom = Rom::load(&args.path)
                .with_context(|| format!("failed to inspect '{}'", args.path.display()))?;
            if args.words {
                for (address, word) in rom.words() {
                    println!("{address:08X}: {word:08X}");
                }
            } else {
                print!("{}", rom.image());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_generates_the_default_file() {
        let cli = Cli::try_parse_from(["romgen"]).unwrap();
        assert!(cli.command.is_none());
        let options = GenerateOptions::from(GenerateArgs::default());
        assert_eq!(options, GenerateOptions::default());
    }

    #[test]
    fn generate_arguments() {
        let cli = Cli::try_parse_from(["romgen", "generate", "out.m", "--seed", "9"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                let options = GenerateOptions::from(args);
                assert_eq!(options.path, PathBuf::from("out.m"));
                assert_eq!(options.seed, Some(9));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn generate_path_defaults() {
        let cli = Cli::try_parse_from(["romgen", "-v", "generate"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Generate(args)) => assert_eq!(args.path, PathBuf::from(DEFAULT_PATH)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn inspect_requires_a_path() {
        assert!(Cli::try_parse_from(["romgen", "inspect"]).is_err());
        let cli = Cli::try_parse_from(["romgen", "inspect", "rom.m", "--words"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Inspect(InspectArgs { words: true, .. }))));
    }
}
