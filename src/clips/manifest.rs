use super::FileProperties;
use anyhow::{Context, Result};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// Removes `dir` with everything in it, then creates it empty.
pub fn reset_working_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("failed to clean working directory {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create working directory {}", dir.display()))?;
    Ok(())
}

pub fn manifest_lines(input_dir: &Path, members: &[FileProperties]) -> Vec<String> {
    members
        .iter()
        .map(|props| format!("file {}", input_dir.join(&props.name).display()))
        .collect()
}

pub fn write_manifest(
    manifest_path: &Path,
    input_dir: &Path,
    members: &[FileProperties],
) -> Result<PathBuf> {
    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(manifest_path)
        .with_context(|| format!("failed to open manifest {}", manifest_path.display()))?;
    for line in manifest_lines(input_dir, members) {
        writeln!(f, "{}", line)?;
    }
    Ok(manifest_path.to_path_buf())
}
