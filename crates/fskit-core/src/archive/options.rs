//! Compression options for archive creation

/// Compression method for archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Store entries uncompressed
    Stored,
    /// Deflate compression (the default)
    Deflated,
}

/// Options for one archive-creation operation
///
/// All fields are optional; an unset or non-positive level falls back to
/// the default of 9, and an unset method means deflate.
#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    /// Deflate compression level, 1-9
    pub level: Option<i32>,
    /// Compression method override
    pub method: Option<CompressionMethod>,
    /// Archive comment written into the end-of-central-directory record
    pub comment: Option<String>,
}

impl ArchiveOptions {
    /// Level used when none is configured
    pub const DEFAULT_LEVEL: i32 = 9;

    /// The deflate level to apply: the configured level if positive
    /// (capped at 9, the strongest deflate setting), else 9.
    #[must_use]
    pub fn effective_level(&self) -> i32 {
        match self.level {
            Some(level) if level > 0 => level.min(Self::DEFAULT_LEVEL),
            _ => Self::DEFAULT_LEVEL,
        }
    }

    /// The method to apply: the configured override, else deflate
    #[must_use]
    pub fn effective_method(&self) -> CompressionMethod {
        self.method.unwrap_or(CompressionMethod::Deflated)
    }
}
