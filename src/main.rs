// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::control;
use git_browse::utils::logging::{format_error, format_info, format_success, format_warning};
use git_browse::{
    BranchFlags, Config, ItemType, RepositoryDescriptor, RepositoryInspector, UrlResolver,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "git-browse")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Resolve GitHub browse and raw download URLs for a git working copy", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = git_browse::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Repository directory, overrides repository.local_path
    #[arg(short, long, value_name = "DIR", env = "GIT_BROWSE_REPO")]
    repo: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show remote identity, branch and branch classification
    Info,

    /// Print the github.com URL for a file, a directory or the repository root
    Browse {
        path: Option<String>,

        #[arg(short, long)]
        branch: Option<String>,

        /// automatic, file or directory
        #[arg(short, long, value_name = "TYPE")]
        item_type: Option<ItemType>,
    },

    /// Print the raw.githubusercontent.com URL for a file
    Download {
        path: String,

        #[arg(short, long)]
        branch: Option<String>,
    },
}

#[derive(Serialize)]
struct InfoReport<'a> {
    #[serde(flatten)]
    repository: &'a RepositoryDescriptor,
    owner: Option<&'a str>,
    name: Option<&'a str>,
    flags: BranchFlags,
}

#[derive(Serialize)]
struct UrlReport<'a> {
    url: &'a str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    control::set_override(cli.color);
    git_browse::utils::logging::init_logger(cli.color, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(repo) = cli.repo {
        config.repository.local_path = repo;
    }
    let json = cli.json || config.output.json;

    let inspector = RepositoryInspector::new(config.repository.clone());
    let repository = inspector
        .inspect_configured()
        .with_context(|| {
            format!(
                "Failed to inspect repository at {}",
                config.repository.local_path.display()
            )
        })?;

    match cli.command {
        Commands::Info => cmd_info(&repository, json),
        Commands::Browse {
            path,
            branch,
            item_type,
        } => {
            let item_type = item_type.unwrap_or(config.resolver.item_type);
            let url = UrlResolver::new(&repository)
                .browse_url(path.as_deref(), branch.as_deref(), item_type)
                .context("Failed to resolve browse URL")?;
            print_url(&url, json)
        }
        Commands::Download { path, branch } => {
            let url = UrlResolver::new(&repository)
                .download_url(Some(path.as_str()), branch.as_deref())
                .context("Failed to resolve download URL")?;
            print_url(&url, json)
        }
    }
}

fn cmd_info(repository: &RepositoryDescriptor, json: bool) -> Result<()> {
    let resolver = UrlResolver::new(repository);
    let owner = resolver.owner().ok();
    let name = resolver.name().ok();
    let flags = BranchFlags::from(repository);

    if json {
        let report = InfoReport {
            repository,
            owner,
            name,
            flags,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let fields = [
        ("Endpoint", non_empty(repository.endpoint())),
        ("Identifier", non_empty(repository.identifier())),
        ("Owner", owner.map(str::to_string)),
        ("Name", name.map(str::to_string)),
        ("Branch", repository.branch().map(str::to_string)),
        (
            "Local root",
            repository.local_root().map(|root| root.display().to_string()),
        ),
    ];
    for (label, value) in fields {
        let value = value.unwrap_or_else(|| "<none>".to_string());
        println!("{}", format_info(&format!("{:<11} {}", format!("{}:", label), value)));
    }

    if flags.github {
        println!("{}", format_success("GitHub repository"));
    } else {
        println!(
            "{}",
            format_warning("Not a GitHub repository, URL commands are unavailable")
        );
    }

    let classifications = [
        ("master", flags.master),
        ("develop", flags.develop),
        ("feature", flags.feature),
        ("release", flags.release),
        ("hotfix", flags.hotfix),
    ];
    for (label, _) in classifications.iter().filter(|(_, matched)| *matched) {
        println!("{}", format_success(&format!("On {} branch", label)));
    }

    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn print_url(url: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&UrlReport { url })?);
    } else {
        println!("{}", url);
    }
    Ok(())
}
