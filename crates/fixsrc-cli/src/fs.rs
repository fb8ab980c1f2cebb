use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix of symbol graph files picked up from input directories.
pub const GRAPH_FILE_SUFFIX: &str = ".fixsrc.json";

pub fn is_graph_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(GRAPH_FILE_SUFFIX))
}

/// Expand `inputs` into graph files. Files are taken as given; directories
/// are searched recursively. The result is sorted and deduplicated.
pub fn discover_graph_files(inputs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = if input.is_absolute() {
            input.clone()
        } else {
            cwd.join(input)
        };
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            for entry in WalkDir::new(&path).follow_links(true) {
                let entry =
                    entry.with_context(|| format!("failed to read directory {}", path.display()))?;
                if entry.file_type().is_file() && is_graph_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            bail!("input not found: {}", input.display());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
