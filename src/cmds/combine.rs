use crate::{clips::combination::Combination, config::Config, ffmpeg::Encoder};
use anyhow::Result;
use comfy_table::Table;
use kdam::BarExt;
use std::{fmt, fs, path::Path};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub planned: usize,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_header(vec!["planned", "created", "skipped", "failed"]);
        table.add_row(vec![
            self.planned.to_string(),
            self.created.to_string(),
            self.skipped.to_string(),
            self.failed.to_string(),
        ]);
        write!(f, "{}", table)
    }
}

/// An existing file at the output path is the only thing that marks a
/// combination as done.
pub fn should_skip(out: &Path) -> bool {
    out.exists()
}

pub struct CombineCommand<'a, E: Encoder> {
    config: &'a Config,
    encoder: E,
}

impl<'a, E: Encoder> CombineCommand<'a, E> {
    pub fn new(config: &'a Config, encoder: E) -> Self {
        Self { config, encoder }
    }

    pub fn execute(&self, combinations: &[Combination]) -> Result<RunSummary> {
        if !self.config.shorts_dir.exists() {
            fs::create_dir_all(&self.config.shorts_dir)?;
            log::debug!("created {}", self.config.shorts_dir.display());
        }

        let mut summary = RunSummary {
            planned: combinations.len(),
            ..Default::default()
        };
        let mut pb = kdam::tqdm!(total = combinations.len());
        for combination in combinations.iter() {
            let name = combination.output_name(&self.config.output_extension);
            let out = self.config.shorts_dir.join(&name);
            if should_skip(&out) {
                pb.write(format!("skipping existing file: {}", name))?;
                summary.skipped += 1;
            } else {
                let status = self.encoder.encode(combination.paths(), &out)?;
                if status.success {
                    pb.write(format!("created: {}", combination.display_names()))?;
                    summary.created += 1;
                } else {
                    pb.write(format!(
                        "ffmpeg failed for {} (exit code {:?}): {}",
                        name,
                        status.code,
                        status.stderr
                    ))?;
                    summary.failed += 1;
                }
            }
            pb.update(1)?;
        }
        Ok(summary)
    }
}
