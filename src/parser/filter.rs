use std::path::Path;

/// Return true if the path is an existing file with a .json extension
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}
