use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod combination;
pub mod planner;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clip {
    pub path: PathBuf,
}

impl Clip {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// spaces become underscores, then everything from the last `.` is cut.
    /// a dot that is not an extension separator is cut as well.
    pub fn sanitized_name(&self) -> String {
        let name = self.file_name().replace(' ', "_");
        match name.rfind('.') {
            Some(i) => name[..i].to_string(),
            None => name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClipSet {
    pub clips: Vec<Clip>,
    pub mandatory: Option<Clip>,
}

pub fn scan(dir: &Path, extension: &str, mandatory_name: &str) -> Result<ClipSet> {
    let mut set = ClipSet::default();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // dangling links below the root are not clips
            Err(e) if e.depth() > 0 => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        let clip = Clip::new(path);
        if clip.file_name() == mandatory_name {
            set.mandatory = Some(clip);
        } else {
            set.clips.push(clip);
        }
    }
    log::debug!(
        "found {} clips in {} (mandatory: {})",
        set.clips.len(),
        dir.display(),
        set.mandatory.is_some()
    );
    Ok(set)
}
