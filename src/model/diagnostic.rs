use serde::{Deserialize, Serialize};

/// A single finding reported by the analysis engine.
///
/// A diagnostic without a `file_path` is "generic": it describes a problem
/// with no file anchor (a configuration error, for instance) and never
/// carries a line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub file_path: Option<String>,
    /// True origin file when the finding surfaced through code composed in
    /// via a trait; takes precedence over `file_path` for any file-identity
    /// purpose such as editor links.
    pub trait_origin_path: Option<String>,
    pub line: Option<u32>,
    pub tip: Option<String>,
    pub identifier: Option<String>,
    pub ignorable: bool,
}

impl Diagnostic {
    /// A file-anchored diagnostic.
    pub fn new(message: impl Into<String>, file_path: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            message: message.into(),
            file_path: Some(file_path.into()),
            trait_origin_path: None,
            line,
            tip: None,
            identifier: None,
            ignorable: true,
        }
    }

    /// A diagnostic with no file anchor.
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_path: None,
            trait_origin_path: None,
            line: None,
            tip: None,
            identifier: None,
            ignorable: true,
        }
    }

    pub fn with_trait_origin(mut self, path: impl Into<String>) -> Self {
        self.trait_origin_path = Some(path.into());
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_ignorable(mut self, ignorable: bool) -> Self {
        self.ignorable = ignorable;
        self
    }

    pub fn is_generic(&self) -> bool {
        self.file_path.is_none()
    }

    /// The file this diagnostic truly belongs to: the trait origin when set,
    /// the nominal file otherwise.
    pub fn origin_path(&self) -> Option<&str> {
        self.trait_origin_path
            .as_deref()
            .or(self.file_path.as_deref())
    }
}
