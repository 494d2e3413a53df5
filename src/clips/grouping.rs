use super::{FileProperties, ParseError};
use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub type Grouping = BTreeMap<String, Vec<FileProperties>>;

/// Regular, non-hidden files in `dir` with the given extension, sorted by path.
pub fn list_media_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?
        .map(|r| r.map(|d| d.path()))
        .collect::<Result<Vec<PathBuf>, _>>()?;
    files.retain(|p| {
        let hidden = p
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false);
        !hidden && p.is_file() && p.extension().unwrap_or_default() == extension
    });
    files.sort();
    Ok(files)
}

pub fn group_files(files: &[PathBuf]) -> Grouping {
    let mut grouping = Grouping::new();
    for file in files {
        let props = match FileProperties::parse(file) {
            Ok(props) => props,
            Err(e @ ParseError::Looping(_)) => {
                log::info!("{}", e);
                continue;
            }
            Err(e) => {
                log::warn!("{}", e);
                continue;
            }
        };
        grouping.entry(props.group_key()).or_default().push(props);
    }

    // nothing to merge for singletons
    grouping.retain(|_, members| members.len() > 1);
    for members in grouping.values_mut() {
        members.sort_by(|a, b| a.chapter.cmp(&b.chapter));
    }
    grouping
}

#[cfg(test)]
mod tests {
    use super::{group_files, list_media_files};
    use std::{fs::File, path::PathBuf};

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from("clips").join(n)).collect()
    }

    #[test]
    fn test_group_and_sort_by_chapter() {
        let grouping = group_files(&paths(&[
            "GH030042.mp4",
            "GH010042.mp4",
            "GH020042.mp4",
            "GX010007.mp4",
        ]));
        assert_eq!(grouping.len(), 1);
        let chapters = grouping["GH010042"]
            .iter()
            .map(|p| p.chapter.as_str())
            .collect::<Vec<_>>();
        assert_eq!(chapters, vec!["01", "02", "03"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_chapters() {
        // same key and chapter, different tail after position 8
        let grouping = group_files(&paths(&["AB020001b.mp4", "AB020001a.mp4", "AB010001.mp4"]));
        let names = grouping["AB010001"]
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["AB010001.mp4", "AB020001b.mp4", "AB020001a.mp4"]);
    }

    #[test]
    fn test_scenario_singleton_dropped() {
        let grouping = group_files(&paths(&["AB01001.mp4", "AB02001.mp4", "CD01999.mp4"]));
        // the fourth name character onwards includes the extension dot
        assert_eq!(grouping.keys().collect::<Vec<_>>(), vec!["AB01001."]);
        let names = grouping["AB01001."]
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["AB01001.mp4", "AB02001.mp4"]);
    }

    #[test]
    fn test_unparsable_files_are_skipped() {
        let grouping = group_files(&paths(&[
            "X",
            "ABxx0001.mp4",
            "AB010001.mp4",
            "AB020001.mp4",
        ]));
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping["AB010001"].len(), 2);
    }

    #[test]
    fn test_surviving_groups_have_two_sorted_members() {
        let grouping = group_files(&paths(&[
            "AA050001.mp4",
            "AA010001.mp4",
            "BB010002.mp4",
            "CC090003.mp4",
            "CC010003.mp4",
            "CC040003.mp4",
        ]));
        for members in grouping.values() {
            assert!(members.len() >= 2);
            assert!(members.windows(2).all(|w| w[0].chapter <= w[1].chapter));
        }
        assert!(!grouping.contains_key("BB010002"));
    }

    #[test]
    fn test_list_media_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "GH020001.mp4",
            "GH010001.mp4",
            "notes.txt",
            "GH010002.MOV",
            ".GH030001.mp4",
            ".AB010001.mp4",
        ] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.mp4")).unwrap();

        let files = list_media_files(dir.path(), "mp4").unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("GH010001.mp4"), dir.path().join("GH020001.mp4")]
        );
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_media_files(&dir.path().join("missing"), "mp4").is_err());
    }
}
