use std::path::Path;
use std::path::PathBuf;

/// Map an input JSON file into the output directory.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    output_dir.join(relative)
}
