//! CLI entry point for leafkit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leafkit::config::Environment;

#[derive(Parser)]
#[command(name = "leafkit")]
#[command(version)]
#[command(about = "Filters, tag collections and output transforms for a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Build environment (development, production); defaults to $SITE_ENV
    #[arg(short, long, global = true)]
    env: Option<Environment>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Print the excerpt of a document
    Excerpt {
        /// Document path, relative to the base directory
        file: PathBuf,

        /// Maximum excerpt length in characters
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Copy passthrough files into the output directory
    Copy,

    /// Run output transforms over the generated HTML
    Transform,

    /// Print the bundled stylesheet and script tags
    Assets,

    /// Remove the output directory
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "leafkit=debug,info"
    } else {
        "leafkit=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let env = cli.env.unwrap_or_else(Environment::from_env);
    let site = leafkit::Site::new(&base_dir, env)?;
    tracing::debug!("Using {:?} ({} environment)", site.base_dir, site.env);

    match cli.command {
        Commands::List { r#type } => {
            leafkit::commands::list::run(&site, &r#type, &mut std::io::stdout().lock())?;
        }

        Commands::Excerpt { file, length } => {
            let excerpt = leafkit::commands::excerpt::run(&site, &file, length)?;
            println!("{}", excerpt);
        }

        Commands::Copy => {
            let copied = leafkit::commands::copy::run(&site)?;
            println!("Copied {} file(s)", copied);
        }

        Commands::Transform => {
            let rewritten = leafkit::commands::transform::run(&site)?;
            println!("Transformed {} file(s)", rewritten);
        }

        Commands::Assets => {
            let (css, js) = leafkit::commands::assets::run(&site)?;
            println!("{}", css);
            println!("{}", js);
        }

        Commands::Clean => {
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
