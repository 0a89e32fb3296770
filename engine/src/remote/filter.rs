use std::path::Path;

/// Predicate deciding which files in a directory are eligible for upload.
///
/// Used only by directory-based dispatch; batch dispatch of explicit item
/// lists never filters.
pub trait UploadFilter: Send + Sync {
    /// Returns `true` if the file at `path` should be uploaded.
    fn is_eligible(&self, path: &Path) -> bool;
}

impl<F> UploadFilter for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn is_eligible(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Case-insensitive file-extension allow-list.
///
/// # Examples
///
/// ```no_run
/// use engine::remote::{ExtensionFilter, UploadFilter};
/// use std::path::Path;
///
/// let filter = ExtensionFilter::new(["png", "jpg", "svg"]);
/// assert!(filter.is_eligible(Path::new("diagram.PNG")));
/// assert!(!filter.is_eligible(Path::new("notes.txt")));
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Creates a filter accepting exactly the given extensions (without dots).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.into().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl UploadFilter for ExtensionFilter {
    fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_matches_case_insensitively() {
        let filter = ExtensionFilter::new(["png", "JPG"]);

        assert!(filter.is_eligible(Path::new("a.png")));
        assert!(filter.is_eligible(Path::new("b.PNG")));
        assert!(filter.is_eligible(Path::new("c.jpg")));
        assert!(!filter.is_eligible(Path::new("d.txt")));
        assert!(!filter.is_eligible(Path::new("no_extension")));
    }

    #[test]
    fn closures_act_as_filters() {
        let filter = |path: &Path| path.to_string_lossy().contains("keep");

        assert!(filter.is_eligible(Path::new("keep_me.bin")));
        assert!(!filter.is_eligible(Path::new("drop_me.bin")));
    }
}
