//! resumatch CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "resumatch",
    version,
    about = "Resume relevance checker: score resumes against a role's required skills"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score resume files against a role's required skills
    Analyze {
        /// Resume files or directories (.pdf, .docx, .txt)
        files: Vec<PathBuf>,

        /// Job role (default: from config)
        #[arg(long)]
        role: Option<String>,

        /// Replace the role's default skills (comma-separated)
        #[arg(long)]
        skills: Option<String>,

        /// Add a required skill (repeatable, comma-separated)
        #[arg(long = "add-skill")]
        add_skill: Vec<String>,

        /// Remove a required skill (repeatable, comma-separated)
        #[arg(long = "remove-skill")]
        remove_skill: Vec<String>,

        /// Load the sample candidates before analyzing the files
        #[arg(long)]
        with_samples: bool,

        /// Skill matching: substring, word-boundary
        #[arg(long)]
        match_mode: Option<String>,

        /// Seed for placeholder candidate details
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory (default: from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report files to write: json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the built-in sample candidates scored against a role
    Sample {
        /// Job role (default: from config)
        #[arg(long)]
        role: Option<String>,

        /// Output directory (default: from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report files to write: json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Interactive session reading commands from stdin
    Shell {
        /// Skill matching: substring, word-boundary
        #[arg(long)]
        match_mode: Option<String>,

        /// Seed for placeholder candidate details
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List job roles and their default skills
    Roles {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the skill vocabulary
    Skills {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a skill catalog TOML file
    Validate {
        /// Path to the catalog file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Render a saved JSON report as HTML or Markdown
    Render {
        /// Report JSON written by `analyze` or `sample`
        #[arg(long)]
        report: PathBuf,

        /// Output file
        #[arg(long)]
        output: PathBuf,

        /// Output format: html, markdown
        #[arg(long, default_value = "html")]
        format: String,
    },

    /// Create a starter config and catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resumatch=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            files,
            role,
            skills,
            add_skill,
            remove_skill,
            with_samples,
            match_mode,
            seed,
            output,
            format,
            config,
        } => commands::analyze::execute(commands::analyze::AnalyzeArgs {
            files,
            role,
            skills,
            add_skill,
            remove_skill,
            with_samples,
            match_mode,
            seed,
            output,
            format,
            config,
        }),
        Commands::Sample {
            role,
            output,
            format,
            config,
        } => commands::sample::execute(role, output, format, config),
        Commands::Shell {
            match_mode,
            seed,
            config,
        } => commands::shell::execute(match_mode, seed, config),
        Commands::Roles { config } => commands::catalog::roles(config),
        Commands::Skills { config } => commands::catalog::skills(config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Render {
            report,
            output,
            format,
        } => commands::render::execute(report, output, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
