use std::path::Path;

use anyhow::Context;
use fancy_regex::Regex;

/// Heading format of the raw dumps this tool was written for. The first
/// capture group must be the chapter number.
pub const DEFAULT_MARKER: &str = r"^第(\d+)章";

pub fn split(input: &Path, output: &Path, marker: &str) -> Result<(), anyhow::Error> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let re = Regex::new(marker).context("invalid chapter marker")?;

    let chapters = split_chapters(&raw, &re)?;
    if chapters.is_empty() {
        anyhow::bail!("no chapter heading matched {marker}");
    }

    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    for (number, body) in &chapters {
        std::fs::write(output.join(format!("ch_{number}.txt")), body)?;
        info!("saved chapter {number}");
    }
    info!("split {} chapters into {}", chapters.len(), output.display());

    Ok(())
}

/// Cuts the dump at heading lines. Text before the first heading is dropped,
/// and a heading repeated inside its own chapter (common in EPUB dumps) is
/// dropped too.
fn split_chapters(raw: &str, re: &Regex) -> Result<Vec<(i64, String)>, anyhow::Error> {
    let raw = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut chapters: Vec<(i64, String)> = Vec::new();
    let mut current: Option<(i64, Vec<String>)> = None;

    for line in raw.split('\n') {
        let heading = re
            .captures(line.trim())?
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok());

        match heading {
            Some(number) => {
                let reopened = current.as_ref().is_some_and(|c| c.0 == number);
                if !reopened {
                    if let Some((number, lines)) = current.take() {
                        chapters.push((number, join_lines(lines)));
                    }
                    current = Some((number, vec![line.trim().to_string()]));
                }
            }
            None => {
                if let Some((_, lines)) = current.as_mut() {
                    lines.push(line.to_string());
                }
            }
        }
    }

    if let Some((number, lines)) = current.take() {
        chapters.push((number, join_lines(lines)));
    }

    Ok(chapters)
}

fn join_lines(lines: Vec<String>) -> String {
    lines.join("\n").trim().to_string()
}
