mod list;
mod locate;
mod namespaces;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nslocate",
    version,
    about = "Resolve namespaced references to files and files back to class names",
    long_about = "nslocate maps PSR-4 style namespaces onto directories. It resolves logical \
                  references such as App\\Models\\User to files, finds the class a file \
                  declares, and lists or searches files across every registered namespace."
)]
pub struct Cli {
    /// Project root; relative config paths resolve against it. Defaults to current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to nslocate.json, then composer.json, in the root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a logical reference to a file
    #[command(
        long_about = "Namespaced references (App\\Config\\Routes) are resolved through the \
                            registry; plain relative references are looked up in the application \
                            directory. Exits with status 1 when nothing is found."
    )]
    Locate {
        /// Reference to resolve, with or without extension
        #[arg(value_name = "REFERENCE")]
        reference: String,
        /// Restrict the lookup to this sub-folder of each base path
        #[arg(long)]
        folder: Option<String>,
        /// File extension
        #[arg(long, default_value = "php")]
        ext: String,
    },
    /// Print the class declared in a file
    Classname {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Find the fully-qualified class name a file maps to
    Qualify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List files below a sub-path of every (or one) namespace
    List {
        #[arg(value_name = "SUBPATH")]
        subpath: String,
        /// Only list this namespace's directories
        #[arg(long, value_name = "PREFIX")]
        namespace: Option<String>,
    },
    /// Find a file in every namespace that has it
    Search {
        #[arg(value_name = "SUBPATH")]
        subpath: String,
        /// File extension
        #[arg(long, default_value = "php")]
        ext: String,
        /// Move matches inside the application directory to the end
        #[arg(long)]
        app_last: bool,
    },
    /// Show the namespace registry in resolution order
    Namespaces,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = nslocate_runtime::init_logging("cli", cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let locator = nslocate_runtime::build_default_locator(&root, cli.config.as_deref())?;

    let found = match cli.command {
        Commands::Locate {
            reference,
            folder,
            ext,
        } => locate::run(&locator, &reference, folder.as_deref(), &ext, cli.json)?,
        Commands::Classname { file } => locate::classname(&locator, &file, cli.json)?,
        Commands::Qualify { file } => locate::qualify(&locator, &file, cli.json)?,
        Commands::List { subpath, namespace } => {
            list::run(&locator, &subpath, namespace.as_deref(), cli.json)?
        }
        Commands::Search {
            subpath,
            ext,
            app_last,
        } => search::run(&locator, &subpath, &ext, !app_last, cli.json)?,
        Commands::Namespaces => namespaces::run(&locator, cli.json)?,
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints a list of paths, one per line or as a JSON array.
pub(crate) fn print_paths(paths: &[PathBuf], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(paths)?);
    } else {
        for path in paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}
