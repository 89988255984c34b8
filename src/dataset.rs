use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A raw pretraining example as it appears in the source `.jsonl` shards.
/// Other fields are ignored on read and dropped from the output.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub text: String,
}

/// A tokenized example; the raw `text` column is gone by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedRecord {
    pub input_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    pub special_tokens_mask: Vec<u32>,
}

/// Manifest written alongside the tokenized shards.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub num_examples: usize,
    pub num_shards: usize,
    pub max_seq_len: usize,
}

/// Returns the sorted `*.jsonl` paths directly under `dir`.
pub fn jsonl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        bail!("data path '{}' does not exist", dir.display());
    }
    // escape the directory component so bracketed names like 'data[v1]'
    // aren't read as glob syntax
    let pattern = format!("{}/*.jsonl", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)
        .with_context(|| format!("bad glob pattern for '{}'", dir.display()))?
    {
        files.push(entry?);
    }
    files.sort();
    Ok(files)
}

pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file =
        File::open(path).with_context(|| format!("couldn't open '{}'", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("couldn't read '{}'", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RawRecord = serde_json::from_str(&line)
            .with_context(|| format!("malformed record at {}:{}", path.display(), i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Applies `f` to fixed-size batches of `records` on a dedicated pool of
/// `num_proc` workers. Output order matches input order; the first failing
/// batch aborts the whole map.
pub fn map_batched<F>(
    records: Vec<RawRecord>,
    batch_size: usize,
    num_proc: usize,
    f: F,
) -> Result<Vec<TokenizedRecord>>
where
    F: Fn(&[RawRecord]) -> Result<Vec<TokenizedRecord>> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_proc)
        .build()
        .context("couldn't build worker pool")?;
    let batches = pool.install(|| {
        records
            .par_chunks(batch_size.max(1))
            .map(|batch| f(batch))
            .collect::<Result<Vec<_>>>()
    })?;
    Ok(batches.into_iter().flatten().collect())
}

pub fn write_shard(path: &Path, records: &[TokenizedRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("couldn't create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_dataset_info(dir: &Path, info: &DatasetInfo) -> Result<()> {
    let path = dir.join("dataset_info.json");
    let file =
        File::create(&path).with_context(|| format!("couldn't create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), info)?;
    Ok(())
}
