use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dix")]
#[command(about = "Keep documentation filenames and README sections in sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .diataxis config
    Init {
        /// Directory to initialize (defaults to the current directory)
        directory: Option<PathBuf>,
    },

    /// Create a new how-to guide
    Howto {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new tutorial
    Tutorial {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new explanation
    Explanation {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new architecture decision record
    Adr {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new handover document
    Handover {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new five-why analysis
    #[command(alias = "5why")]
    Fivewhy {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new note
    Note {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new project document
    Project {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Resync filenames and README sections for every kind
    Update {
        /// Directory to resync (defaults to the current directory)
        directory: Option<PathBuf>,
    },
}
