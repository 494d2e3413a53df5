use self::merge::{merge_all, MergeArgs, MergeOutcome};
use crate::clips::MergeConfig;
use anyhow::Result;
use clap::Parser;

pub mod merge;
pub mod summary;

pub fn handle_commands() -> Result<()> {
    // clap exits by itself on --help, --version and usage errors
    let args = MergeArgs::parse();
    let config = MergeConfig::default();

    let reports = merge_all(&config, &args.tool_path, &args.input_dir, &args.output_dir)?;
    for report in reports.iter() {
        if report.outcome == MergeOutcome::Merged {
            log::info!("{} -> {}", report.key, report.output.display());
        }
    }
    Ok(())
}
