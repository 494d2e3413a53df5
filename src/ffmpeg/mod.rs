use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

/// A single invocation of the external tool.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    tool: PathBuf,
    args: Vec<String>,
}

impl FfmpegCommand {
    pub fn new(tool: &Path, args: Vec<String>) -> Self {
        Self {
            tool: tool.to_path_buf(),
            args,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Command line as it would be typed in a shell, for logging.
    pub fn command_line(&self) -> String {
        vec![vec![self.tool.display().to_string()], self.args().to_vec()]
            .concat()
            .join(" ")
    }

    /// Runs the tool to completion. Stdout is captured, stderr goes straight
    /// to the console so ffmpeg's progress output stays visible.
    pub fn run(&self) -> io::Result<Output> {
        log::debug!("{:#?}", self.args);
        Command::new(&self.tool)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
    }
}

/// `-f concat -safe 0 -i <list> -c copy <out>`
pub fn concat_cmd(tool: &Path, file_list_path: &Path, out: &Path) -> FfmpegCommand {
    let args = vec![
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        file_list_path.display().to_string(),
        "-c".to_string(),
        "copy".to_string(),
        out.display().to_string(),
    ];
    FfmpegCommand::new(tool, args)
}
