use crate::clips::{grouping::Grouping, MergeConfig};
use comfy_table::Table;
use std::path::Path;

pub fn groups_table(config: &MergeConfig, output_dir: &Path, grouping: &Grouping) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["group", "clips", "chapters", "output"]);
    for (key, members) in grouping.iter() {
        let chapters = members
            .iter()
            .map(|p| p.chapter.as_str())
            .collect::<Vec<_>>()
            .join(",");
        table.add_row(vec![
            key.clone(),
            members.len().to_string(),
            chapters,
            config.output_path(output_dir, key).display().to_string(),
        ]);
    }
    table
}
