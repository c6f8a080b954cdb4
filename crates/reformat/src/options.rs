// ABOUTME: Configuration options for the reformatter: column count, link target, domain blocklist.
// ABOUTME: OptionsBuilder provides a fluent API and validates the result on build.

use crate::error::ReformatError;

/// Number of columns the entries are split into by default.
pub const DEFAULT_COLUMNS: usize = 3;

/// Largest column count that still gives each column a non-zero width.
pub const MAX_COLUMNS: usize = 96;

/// Value written to the `target` attribute of every entry link by default.
pub const DEFAULT_LINK_TARGET: &str = "_blank";

/// Configuration options for a reformat run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub columns: usize,
    pub link_target: String,
    pub blocklist: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            link_target: DEFAULT_LINK_TARGET.to_string(),
            blocklist: Vec::new(),
        }
    }
}

impl Options {
    /// Start building a customized set of options.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Checks the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ReformatError> {
        if self.columns == 0 {
            return Err(ReformatError::invalid_options("columns must be at least 1"));
        }
        if self.columns > MAX_COLUMNS {
            return Err(ReformatError::invalid_options(format!(
                "columns must be at most {MAX_COLUMNS}"
            )));
        }
        if self.link_target.trim().is_empty() {
            return Err(ReformatError::invalid_options("link target must not be empty"));
        }
        Ok(())
    }

    /// Returns true if the given host matches any blocklisted domain.
    ///
    /// Matching is a plain substring test, so `example.com` also blocks
    /// `www.example.com`.
    pub fn is_blocked_host(&self, host: &str) -> bool {
        self.blocklist.iter().any(|d| host.contains(d.as_str()))
    }
}

/// Builder for constructing validated [`Options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    opts: Options,
}

impl OptionsBuilder {
    /// Create a new OptionsBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the number of columns.
    pub fn columns(mut self, columns: usize) -> Self {
        self.opts.columns = columns;
        self
    }

    /// Set the `target` attribute value for entry links.
    pub fn link_target(mut self, target: impl Into<String>) -> Self {
        self.opts.link_target = target.into();
        self
    }

    /// Add one domain to the blocklist. Blank values are ignored.
    pub fn block_domain(mut self, domain: impl AsRef<str>) -> Self {
        let domain = domain.as_ref().trim();
        if !domain.is_empty() {
            self.opts.blocklist.push(domain.to_string());
        }
        self
    }

    /// Add every non-blank line of `text` to the blocklist.
    pub fn blocklist_text(self, text: &str) -> Self {
        text.lines().fold(self, |b, line| b.block_domain(line))
    }

    /// Validate and return the options.
    pub fn build(self) -> Result<Options, ReformatError> {
        self.opts.validate()?;
        Ok(self.opts)
    }
}
