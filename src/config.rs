/// Runtime options for decoding.
#[derive(Debug, Clone)]
pub struct Config {
    /// Return a short buffer instead of failing when the payload ends before
    /// the declared element count.
    pub allow_truncated: bool,
    /// Label shown next to the progress percentage.
    pub label: String,
    /// Draw a console progress bar while decoding.
    pub show_progress: bool,
}

/// Progress label used when none is configured.
pub const DEFAULT_LABEL: &str = "Loading the file ...";

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_truncated: false,
            label: DEFAULT_LABEL.to_string(),
            show_progress: true,
        }
    }
}
