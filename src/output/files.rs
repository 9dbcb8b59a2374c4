use std::io;
use std::path::{Path, PathBuf};

/// File stem used when a URL has no final path segment
const FALLBACK_STEM: &str = "index";

/// Writes fetched HTML pages and their visible text to disk
///
/// Output directories must already exist; they are never created here.
#[derive(Debug, Clone, Default)]
pub struct PageWriter {
    html_dir: Option<PathBuf>,
    text_dir: Option<PathBuf>,
}

impl PageWriter {
    /// Creates a writer; `None` disables the corresponding output
    pub fn new(html_dir: Option<PathBuf>, text_dir: Option<PathBuf>) -> Self {
        Self { html_dir, text_dir }
    }

    pub fn saves_html(&self) -> bool {
        self.html_dir.is_some()
    }

    pub fn saves_text(&self) -> bool {
        self.text_dir.is_some()
    }

    /// Writes the raw body to `<html_dir>/<stem>.html`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(path))` - The file that was written
    /// * `Ok(None)` - Raw HTML saving is disabled
    /// * `Err(io::Error)` - The write failed
    pub fn write_html(&self, url: &str, body: &str) -> io::Result<Option<PathBuf>> {
        let Some(dir) = &self.html_dir else {
            return Ok(None);
        };
        let path = output_path(dir, url, "html");
        std::fs::write(&path, body)?;
        Ok(Some(path))
    }

    /// Writes the visible text to `<text_dir>/<stem>.txt`, each node followed by a space
    pub fn write_text(&self, url: &str, text_nodes: &[String]) -> io::Result<Option<PathBuf>> {
        let Some(dir) = &self.text_dir else {
            return Ok(None);
        };
        let path = output_path(dir, url, "txt");
        std::fs::write(&path, join_text_nodes(text_nodes))?;
        Ok(Some(path))
    }
}

/// File stem for a URL: everything after its last `/`
///
/// # Examples
///
/// ```
/// use simple_crawler::output::page_file_stem;
///
/// assert_eq!(page_file_stem("http://example.com/docs/intro"), "intro");
/// assert_eq!(page_file_stem("http://example.com"), "example.com");
/// assert_eq!(page_file_stem("http://example.com/"), "index");
/// ```
pub fn page_file_stem(url: &str) -> String {
    let stem = match url.rfind('/') {
        Some(pos) => &url[pos + 1..],
        None => url,
    };

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

fn output_path(dir: &Path, url: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", page_file_stem(url), extension))
}

fn join_text_nodes(text_nodes: &[String]) -> String {
    let mut text = String::with_capacity(text_nodes.iter().map(|t| t.len() + 1).sum());
    for node in text_nodes {
        text.push_str(node);
        text.push(' ');
    }
    text
}
