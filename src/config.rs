use std::path::PathBuf;

const CLIPS_DIR: &str = r"C:\Test";
const SHORTS_DIR: &str = r"E:\Test";
const FFMPEG: &str = "ffmpeg";

/// clip that must appear in every short when `USE_MANDATORY_CLIP` is set
const MANDATORY_CLIP_NAME: &str = "ExampleClip.mov";
const USE_MANDATORY_CLIP: bool = false;

const SOURCE_EXTENSION: &str = "mov";
const OUTPUT_EXTENSION: &str = "mp4";
const LIST_FILE: &str = "concat_list.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// the mandatory clip takes one slot of every combination
    MandatoryRequired,
    /// the mandatory clip, if found, is an ordinary candidate
    MandatoryOptional,
}

impl From<bool> for Policy {
    fn from(mandatory_required: bool) -> Self {
        if mandatory_required {
            Policy::MandatoryRequired
        } else {
            Policy::MandatoryOptional
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub clips_dir: PathBuf,
    pub shorts_dir: PathBuf,
    pub ffmpeg: String,
    pub mandatory_clip_name: String,
    pub mandatory_required: bool,
    pub source_extension: String,
    pub output_extension: String,
    /// concat demuxer instruction file, rewritten for every combination
    pub list_file: PathBuf,
}

impl Config {
    pub fn policy(&self) -> Policy {
        Policy::from(self.mandatory_required)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clips_dir: PathBuf::from(CLIPS_DIR),
            shorts_dir: PathBuf::from(SHORTS_DIR),
            ffmpeg: FFMPEG.to_string(),
            mandatory_clip_name: MANDATORY_CLIP_NAME.to_string(),
            mandatory_required: USE_MANDATORY_CLIP,
            source_extension: SOURCE_EXTENSION.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
            list_file: PathBuf::from(LIST_FILE),
        }
    }
}
