use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use recon_model::NormalizedRecord;

/// Writes normalized records as CSV with the human-facing headers.
pub fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output: {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))
}

/// Output path for a processed input: `<stem>_normalized.csv`, placed in
/// `output_dir` when given, otherwise beside the input.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("sales");
    let name = format!("{stem}_normalized.csv");
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::output_path;

    #[test]
    fn output_lands_beside_input_by_default() {
        let path = output_path(Path::new("/data/meesho.csv"), None);
        assert_eq!(path, Path::new("/data/meesho_normalized.csv"));
    }

    #[test]
    fn output_dir_overrides_location() {
        let path = output_path(Path::new("/data/meesho.csv"), Some(Path::new("/out")));
        assert_eq!(path, Path::new("/out/meesho_normalized.csv"));
    }
}
