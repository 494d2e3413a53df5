use self::grouping::{group_files, list_media_files, Grouping};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod grouping;
pub mod manifest;

/// Settings shared by grouping and merging.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Scratch directory for manifests; wiped on every run.
    pub working_dir: PathBuf,
    /// Appended to the group key in output file names.
    pub suffix: String,
    /// Container extension, without the dot.
    pub extension: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("input"),
            suffix: "M".to_string(),
            extension: "mp4".to_string(),
        }
    }
}

impl MergeConfig {
    pub fn manifest_path(&self, key: &str) -> PathBuf {
        self.working_dir.join(format!("{}.txt", key))
    }

    pub fn output_path(&self, output_dir: &Path, key: &str) -> PathBuf {
        output_dir.join(format!("{}{}.{}", key, self.suffix, self.extension))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("failed to parse name {0}")]
    EmptyName(String),
    #[error("found looping file {0}, will be ignored")]
    Looping(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProperties {
    pub name: String,
    pub encoding: String,
    pub chapter: String,
    pub file_number: String,
}

/// characters [start, end) of `s`, clamped to its length
fn chars_between(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}

impl FileProperties {
    pub fn parse(path: &Path) -> Result<Self, ParseError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(ParseError::EmptyName(path.display().to_string()));
        }

        // ASCII digits only, with optional sign and surrounding spaces
        let chapter = chars_between(&name, 2, 4);
        if chapter.trim().parse::<i64>().is_err() {
            return Err(ParseError::Looping(path.display().to_string()));
        }

        Ok(Self {
            encoding: chars_between(&name, 0, 2),
            file_number: chars_between(&name, 4, 8),
            chapter,
            name,
        })
    }

    pub fn group_key(&self) -> String {
        format!("{}01{}", self.encoding, self.file_number)
    }
}

#[derive(Debug)]
pub struct GroupedClips {
    pub working_dir: PathBuf,
    pub grouping: Grouping,
}

/// Groups the clips in `input_dir` and writes one manifest per group into a
/// freshly recreated working directory.
pub fn group(config: &MergeConfig, input_dir: &Path) -> Result<GroupedClips> {
    let files = list_media_files(input_dir, &config.extension)?;
    log::debug!("{} {} files in {}", files.len(), config.extension, input_dir.display());
    let grouping = group_files(&files);

    manifest::reset_working_dir(&config.working_dir)?;
    for (key, members) in grouping.iter() {
        manifest::write_manifest(&config.manifest_path(key), input_dir, members)?;
    }
    log::debug!(
        "{} manifests written to {}",
        grouping.len(),
        config.working_dir.display()
    );
    Ok(GroupedClips {
        working_dir: config.working_dir.clone(),
        grouping,
    })
}
