//! JSON出力

use crate::error::Result;
use brand_match_common::MatchResult;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    count: usize,
    results: &'a [MatchResult],
}

pub fn write_results(results: &[MatchResult], output_path: &Path) -> Result<()> {
    let report = JsonReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        count: results.len(),
        results,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
