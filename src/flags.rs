use clap::Parser;

/// brook - a small interactive command shell
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "brook", version, about)]
pub struct Flags {
    /// Run a single command line, then exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Neither load nor save the history file
    #[arg(long)]
    pub no_history: bool,
}
