use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod stage;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The power's source directory
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// The command to execute (defaults to `build`)
    #[command(subcommand)]
    command: Option<PowerCommand>,
}

#[derive(Parser)]
struct CleanArgs {
    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum PowerCommand {
    /// Stage the power's files into dist/
    Build,

    /// Delete the dist/ directory
    Clean(CleanArgs),
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "powerstage=warn",
        1 => "powerstage=info",
        _ => "powerstage=debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let root = if args.root.is_relative() {
        std::env::current_dir()?.join(&args.root)
    } else {
        args.root
    };

    match args.command.unwrap_or(PowerCommand::Build) {
        PowerCommand::Build => {
            commands::build::run(&root)?;
        }
        PowerCommand::Clean(args) => {
            commands::clean::run(&root, &args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_builds_current_directory() {
        let args = Args::try_parse_from(["powerstage"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_clean_with_global_flags() {
        let args =
            Args::try_parse_from(["powerstage", "clean", "--dry-run", "-vv", "--root", "power"])
                .unwrap();
        assert_eq!(args.root, PathBuf::from("power"));
        assert_eq!(args.verbose, 2);
        assert!(matches!(
            args.command,
            Some(PowerCommand::Clean(CleanArgs { dry_run: true }))
        ));
    }
}
