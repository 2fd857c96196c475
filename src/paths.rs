//! Fuzzy relativization of absolute paths for display.

/// Shortens absolute paths by stripping the longest matching configured root.
///
/// Matching is segment-wise: the root and the input are split on the
/// configured separator and compared segment by segment, case-sensitively on
/// code points. Partial segment matches do not count, and the leading empty
/// segment of an absolute path is on its own never a match. Because whole
/// segments are stripped, a multi-byte character is never cut in half.
#[derive(Debug, Clone)]
pub struct FuzzyPathResolver {
    roots: Vec<String>,
    separator: char,
}

impl FuzzyPathResolver {
    pub fn new(roots: Vec<String>, separator: char) -> Self {
        Self { roots, separator }
    }

    /// A resolver with no roots; `resolve` returns its input unchanged.
    pub fn identity() -> Self {
        Self {
            roots: Vec::new(),
            separator: '/',
        }
    }

    /// Converts an absolute path to its display form.
    ///
    /// Picks the configured root sharing the longest segment prefix with
    /// `path` (first configured wins ties), strips that prefix plus the
    /// following separator, and returns the remainder. When no root shares
    /// a prefix the input is returned unchanged.
    pub fn resolve(&self, path: &str) -> String {
        let segments: Vec<&str> = path.split(self.separator).collect();

        let mut best = 0;
        for root in &self.roots {
            let root_segments: Vec<&str> = root.split(self.separator).collect();
            let mut shared = 0;
            while shared < root_segments.len()
                && shared < segments.len()
                && root_segments[shared] == segments[shared]
            {
                shared += 1;
            }
            // A run of empty segments is an empty string prefix, not a match.
            if segments[..shared].iter().all(|segment| segment.is_empty()) {
                continue;
            }
            if shared > best {
                best = shared;
            }
        }

        if best == 0 {
            return path.to_string();
        }
        segments[best..].join(&self.separator.to_string())
    }
}
