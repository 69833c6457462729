//! Output formatting for the first search hit.
//!
//! Produces the single stdout line and, when requested, the title side file.

use crate::sanitize::{EntityTable, unescape_title};
use crate::youtube::SearchResult;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Line printed when the search has no hits.
pub const NO_RESULTS: &str = "No videos found.";

/// Side file name used by `--createTitleFile`.
pub const TITLE_FILE_NAME: &str = "video_title.txt";

/// What to do with the title of the first hit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Print the watch URL only
    #[default]
    UrlOnly,
    /// Append `&title=<percent-encoded title>` to the URL
    AppendTitle,
    /// Print the URL and write the title to this file
    TitleFile(PathBuf),
}

/// Everything to emit for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Line for stdout, without the trailing newline
    pub line: String,
    /// Side file path and contents, if any
    pub title_file: Option<(PathBuf, String)>,
}

/// Canonical watch page for a video.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Build the output for the first hit (or its absence).
///
/// # Arguments
/// * `result` - First search hit, if any
/// * `mode` - Title handling
/// * `entities` - Escapes to undo in the title
///
/// # Returns
/// * `Rendered` - Stdout line and optional side file
pub fn render(result: Option<&SearchResult>, mode: &OutputMode, entities: &EntityTable) -> Rendered {
    let Some(result) = result else {
        return Rendered {
            line: NO_RESULTS.to_string(),
            title_file: None,
        };
    };

    let url = watch_url(&result.video_id);
    let title = unescape_title(&result.title, entities);

    match mode {
        OutputMode::UrlOnly => Rendered {
            line: url,
            title_file: None,
        },
        OutputMode::AppendTitle => Rendered {
            line: format!("{}&title={}", url, urlencoding::encode(&title)),
            title_file: None,
        },
        OutputMode::TitleFile(path) => Rendered {
            line: url,
            title_file: Some((path.clone(), title)),
        },
    }
}

/// Print the line, then write the side file.
///
/// # Details
/// A failed side-file write is logged but not returned: the URL has already
/// been delivered and the run still counts as a success.
pub fn emit<W: Write>(rendered: &Rendered, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rendered.line)?;
    out.flush()?;

    if let Some((path, title)) = &rendered.title_file {
        match fs::write(path, title) {
            Ok(()) => log::debug!("Wrote title to {}", path.display()),
            Err(e) => log::error!("Error writing title to {}: {}", path.display(), e),
        }
    }

    Ok(())
}
