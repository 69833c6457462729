//! Command-line arguments.

use crate::output::{OutputMode, TITLE_FILE_NAME};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidf", version, about = "Find a YouTube video and print its URL", long_about = None)]
pub struct Cli {
    /// Search query words (joined with spaces)
    #[arg(required = true, num_args = 1.., value_name = "QUERY")]
    pub words: Vec<String>,

    /// Write the video title to video_title.txt
    #[arg(long = "createTitleFile", visible_alias = "create-title-file")]
    pub create_title_file: bool,

    /// Append &title=<title> to the printed URL
    #[arg(long, conflicts_with = "create_title_file")]
    pub append_title: bool,

    /// Read YOUTUBE_API_KEY from this file instead of ~/.config/fabric/.env
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the YouTube Data API root
    #[arg(long, hide = true, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Search phrase made of all positional words.
    pub fn query(&self) -> String {
        self.words.join(" ")
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.create_title_file {
            OutputMode::TitleFile(PathBuf::from(TITLE_FILE_NAME))
        } else if self.append_title {
            OutputMode::AppendTitle
        } else {
            OutputMode::UrlOnly
        }
    }
}
