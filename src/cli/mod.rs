pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gitgrade")]
#[command(about = "GitGrade - GitHub repository analyzer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Analyze a single repository and print the report
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/repo
        repo: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
