use clap::Parser;
use file_adapters::application::dto::DisplayRequest;
use std::path::PathBuf;

/// Print example TXT, CSV and JSON files through a uniform reader adapter
#[derive(Parser, Debug)]
#[command(name = "file-adapters")]
#[command(version)]
#[command(about = "Print example TXT, CSV and JSON files through a uniform reader adapter", long_about = None)]
pub struct Args {
    /// Directory the input paths are resolved against (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Plain-text file to print [default: example.txt]
    #[arg(long, value_name = "PATH")]
    pub txt: Option<PathBuf>,

    /// CSV file to print [default: example.csv]
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// JSON file to print [default: example.json]
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Print progress messages to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, leaving the exit decision to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Builds the display request, falling back to the example files
    pub fn to_request(&self) -> DisplayRequest {
        let mut builder = DisplayRequest::builder();
        if let Some(dir) = &self.dir {
            builder = builder.base_dir(dir);
        }
        if let Some(path) = &self.txt {
            builder = builder.text_path(path);
        }
        if let Some(path) = &self.csv {
            builder = builder.csv_path(path);
        }
        if let Some(path) = &self.json {
            builder = builder.json_path(path);
        }
        builder.build()
    }
}
