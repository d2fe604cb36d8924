use clap::Parser;
use std::path::PathBuf;

/// Clean an HTML file by removing scripts, styles, comments and unnecessary attributes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the HTML file to be cleaned
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Path to save the cleaned HTML file
    /// (default: 'cleaned_[input_file_name]')
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Modify the input file directly (overwrite)
    #[arg(short, long)]
    pub in_place: bool,

    /// Format the output HTML with indentation for readability
    #[arg(short, long)]
    pub pretty: bool,

    /// Force overwrite of the output file if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Remove all class attributes from HTML elements
    #[arg(short = 'c', long)]
    pub remove_classes: bool,

    /// Remove all URLs and links from the HTML (href, src, etc.)
    #[arg(short = 'l', long)]
    pub remove_links: bool,

    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,
}
