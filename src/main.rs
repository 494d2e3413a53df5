use anyhow::Result;

mod clips;
mod cmds;
mod ffmpeg;

fn main() -> Result<()> {
    simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default())?;
    cmds::handle_commands()
}
