use serde::{Deserialize, Serialize};

/// Split parameters suitable for config files.
///
/// The defaults are the layout every run uses unless a config says otherwise:
/// quadrants go to `split/`, failures to `split_error.log`, and only
/// `.png`/`.jpg`/`.jpeg` entries are picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    /// Subdirectory of the selected directory receiving the quadrants
    pub output_subdir: String,
    /// File name of the error log written into the selected directory
    pub error_log: String,
    /// Accepted extensions, lowercase and without the leading dot
    pub extensions: Vec<String>,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            output_subdir: "split".to_string(),
            error_log: "split_error.log".to_string(),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }
}

impl SplitParams {
    /// Case-insensitive suffix match of an entry name against `extensions`.
    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext.to_lowercase())))
    }

    /// Load parameters from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &std::path::Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| crate::Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
