use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `lms` binary.
#[derive(Debug, Parser)]
#[command(name = "lms", version, about = "LMS items service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the items HTTP API.
    Serve(ServeArgs),
    /// Print the domain tree rooted at an item as JSON.
    Tree(TreeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file, or `:memory:` (overrides database.path)
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Id of the root item
    pub id: i64,

    /// Database file (overrides database.path)
    #[arg(long)]
    pub database: Option<String>,
}
