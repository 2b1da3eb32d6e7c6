use super::{ffmpeg, EncodeStatus};
use anyhow::Result;
use std::{fs::OpenOptions, io::Write, path::Path};

fn escape(path: &Path) -> String {
    path.display().to_string().replace('\'', r"'\''")
}

pub fn write_concat_list(file_list_path: &Path, inputs: &[&Path]) -> Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(file_list_path)?;
    for input in inputs {
        writeln!(f, "file '{}'", escape(input))?;
    }
    Ok(())
}

pub fn concat_cmd(program: &str, file_list_path: &Path, out: &Path) -> Result<EncodeStatus> {
    let args = vec![
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        file_list_path.display().to_string(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-strict".to_string(),
        "experimental".to_string(),
        "-b:a".to_string(),
        "192k".to_string(),
        out.display().to_string(),
    ];
    ffmpeg(program, args)
}
