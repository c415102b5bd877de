use std::path::Path;

use anyhow::Context;
use yomu::domain::{entities::chapter::Chapter, repositories::content::MANIFEST_FILENAME};

/// Writes the precomputed chapter list the reader prefers over probing.
pub fn generate(path: &Path) -> Result<(), anyhow::Error> {
    let chapters = collect_chapters(path)?;
    if chapters.is_empty() {
        anyhow::bail!("no ch_<n>.txt files under {}", path.display());
    }

    let filenames: Vec<String> = chapters.into_iter().map(|c| c.filename).collect();

    let file = std::fs::File::create(path.join(MANIFEST_FILENAME))
        .with_context(|| format!("failed to create manifest in {}", path.display()))?;
    serde_json::to_writer_pretty(&file, &filenames)?;
    info!("wrote manifest with {} chapters", filenames.len());

    Ok(())
}

fn collect_chapters(path: &Path) -> Result<Vec<Chapter>, anyhow::Error> {
    let mut chapters: Vec<Chapter> = std::fs::read_dir(path)
        .with_context(|| format!("failed to read {}", path.display()))?
        .filter_map(Result::ok)
        .filter_map(|entry| Chapter::from_filename(&entry.file_name().to_string_lossy()))
        .collect();

    chapters.sort_by_key(|c| c.number);

    Ok(chapters)
}
