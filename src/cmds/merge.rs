use super::summary::groups_table;
use crate::{
    clips::{group, MergeConfig},
    ffmpeg::concat_cmd,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Merge grouped camera clips with ffmpeg's concat demuxer.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct MergeArgs {
    /// The path to the ffmpeg executable.
    pub tool_path: PathBuf,
    /// The folder to merge from.
    pub input_dir: PathBuf,
    /// The folder to put results in.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged,
    /// The tool ran but exited unsuccessfully; `None` when killed by a signal.
    ToolFailed(Option<i32>),
    /// The tool could not be started at all.
    LaunchFailed(String),
}

#[derive(Debug)]
pub struct MergeReport {
    pub key: String,
    pub manifest: PathBuf,
    pub output: PathBuf,
    pub outcome: MergeOutcome,
}

/// Runs the concat for one manifest. Failures are logged and reported, never
/// returned as errors, so one broken group does not stop the batch.
pub fn run_merge(tool: &Path, manifest: &Path, output: &Path) -> MergeOutcome {
    let cmd = concat_cmd(tool, manifest, output);
    log::info!("running merge for {}", manifest.display());
    match std::fs::read_to_string(manifest) {
        Ok(content) => log::info!("\n{}", content.trim_end()),
        Err(e) => log::warn!("could not read {}: {}", manifest.display(), e),
    }
    log::info!("output: {}", output.display());
    log::info!("will run command {}", cmd.command_line());

    let cmd_output = match cmd.run() {
        Ok(cmd_output) => cmd_output,
        Err(e) => {
            log::error!("failed to execute command {}", cmd.command_line());
            log::error!("{}", e);
            return MergeOutcome::LaunchFailed(e.to_string());
        }
    };
    let stdout = String::from_utf8_lossy(&cmd_output.stdout);
    if !cmd_output.status.success() {
        log::warn!("{} exited with {}", tool.display(), cmd_output.status);
        if !stdout.is_empty() {
            log::warn!("{}", stdout);
        }
        return MergeOutcome::ToolFailed(cmd_output.status.code());
    }
    if !stdout.is_empty() {
        log::info!("{}", stdout);
    }
    MergeOutcome::Merged
}

pub fn merge_all(
    config: &MergeConfig,
    tool: &Path,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<MergeReport>> {
    let grouped = group(config, input_dir)?;
    if grouped.grouping.is_empty() {
        log::info!("nothing to merge in {}", input_dir.display());
        return Ok(vec![]);
    }
    println!("{}", groups_table(config, output_dir, &grouped.grouping));

    let mut reports = vec![];
    for key in grouped.grouping.keys() {
        let manifest = config.manifest_path(key);
        let output = config.output_path(output_dir, key);
        let outcome = run_merge(tool, &manifest, &output);
        reports.push(MergeReport {
            key: key.clone(),
            manifest,
            output,
            outcome,
        });
    }
    Ok(reports)
}
