use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "expdf")]
#[command(about = "Export single pages of a PDF as standalone PDF files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display document metadata
    Info {
        /// PDF file to inspect
        path: PathBuf,

        /// Emit the metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the document's pages
    Pages {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Export one page as a standalone PDF
    Extract {
        /// PDF file to export from
        path: PathBuf,

        /// Page to export: a number or a display label like "Página 3"
        page: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export every page as a standalone PDF
    #[command(alias = "burst")]
    Split {
        /// PDF file to export from
        path: PathBuf,

        /// Output directory
        #[arg(short = 'd', long)]
        output_dir: PathBuf,

        /// Filename prefix; files are named "<prefix><page>.pdf"
        #[arg(long, default_value = "documento")]
        prefix: String,
    },
}
