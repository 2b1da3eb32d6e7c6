use self::combine::{CombineCommand, RunSummary};
use crate::{
    clips::{planner, scan},
    config::Config,
    error::ConfigError,
    ffmpeg::FfmpegEncoder,
};
use anyhow::Result;

pub mod combine;

pub fn handle_commands(config: &Config) -> Result<RunSummary> {
    if !config.clips_dir.is_dir() {
        return Err(ConfigError::ClipsDirNotFound(config.clips_dir.clone()).into());
    }

    let set = scan(
        &config.clips_dir,
        &config.source_extension,
        &config.mandatory_clip_name,
    )?;
    let mut combinations = planner::plan(set, config.policy(), &config.mandatory_clip_name)?;
    planner::shuffle(&mut combinations, &mut rand::thread_rng());
    log::info!(
        "{} combinations from {}",
        combinations.len(),
        config.clips_dir.display()
    );

    let encoder = FfmpegEncoder::new(&config.ffmpeg, &config.list_file);
    let summary = CombineCommand::new(config, encoder).execute(&combinations)?;
    println!("{}", summary);
    Ok(summary)
}
