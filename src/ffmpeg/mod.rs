use anyhow::Result;
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

pub mod concat;

use self::concat::{concat_cmd, write_concat_list};

/// What the encoder reported for one run. The executor decides what to do
/// with a failure; nothing here retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeStatus {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

impl EncodeStatus {
    #[cfg(test)]
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }
}

pub trait Encoder {
    fn encode(&self, inputs: [&Path; 3], out: &Path) -> Result<EncodeStatus>;
}

fn ffmpeg(program: &str, args: Vec<String>) -> Result<EncodeStatus> {
    let args = vec![
        vec![
            "-loglevel".to_string(),
            "warning".to_string(),
            "-y".to_string(),
        ],
        args,
    ]
    .concat();
    log::debug!("{} {:#?}", program, args);
    let output = Command::new(program).args(args).output()?;
    Ok(EncodeStatus {
        success: output.status.success(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Concatenates through ffmpeg's concat demuxer. The list file is shared
/// by every call and removed after each one, so runs must not overlap.
#[derive(Debug)]
pub struct FfmpegEncoder {
    program: String,
    list_file: PathBuf,
}

impl FfmpegEncoder {
    pub fn new(program: &str, list_file: &Path) -> Self {
        Self {
            program: program.to_string(),
            list_file: list_file.to_path_buf(),
        }
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, inputs: [&Path; 3], out: &Path) -> Result<EncodeStatus> {
        write_concat_list(&self.list_file, &inputs)?;
        let status = concat_cmd(&self.program, &self.list_file, out);
        if let Err(e) = fs::remove_file(&self.list_file) {
            log::debug!("could not remove {}: {}", self.list_file.display(), e);
        }
        status
    }
}
