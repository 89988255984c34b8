use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::dataset::{self, DatasetInfo};
use crate::filter::strip_scripts;
use crate::ranges::DEFAULT_REMOVAL_RANGES;
use crate::tokenizer::BatchTokenizer;

pub struct TokenizeOptions {
    pub model_path: PathBuf,
    pub data_path: PathBuf,
    pub output_path: PathBuf,
    pub max_seq_len: usize,
    pub batch_size: usize,
    pub num_proc: usize,
}

/// Reads `input` as UTF-8, strips the default non-Chinese script ranges,
/// trims, and either writes the result to `output` or prints it to stdout
/// inside the report banner.
pub fn clean(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !input.exists() {
        bail!("input file '{}' does not exist", input.display());
    }
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("couldn't read '{}' as UTF-8", input.display()))?;

    let cleaned = strip_scripts(&text, DEFAULT_REMOVAL_RANGES);
    // removed characters can leave stray whitespace at either end
    let cleaned = cleaned.trim();

    match output {
        Some(output) => {
            std::fs::write(&output, cleaned)
                .with_context(|| format!("couldn't write '{}'", output.display()))?;
            write_report(std::io::stdout(), &input, &Outcome::SavedTo(&output))?;
        }
        None => {
            write_report(std::io::stdout(), &input, &Outcome::Cleaned(cleaned))?;
        }
    }
    Ok(())
}

pub enum Outcome<'a> {
    SavedTo(&'a Path),
    Cleaned(&'a str),
}

pub fn write_report(mut writer: impl Write, input: &Path, outcome: &Outcome) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "--- Text Cleaning Results (Non-Regex) ---")?;
    writeln!(writer, "Input read from: {}", input.display())?;
    match outcome {
        Outcome::SavedTo(path) => writeln!(writer, "Output saved to: {}", path.display())?,
        Outcome::Cleaned(text) => writeln!(writer, "Cleaned Text:  {text}")?,
    }
    writeln!(writer, "-----------------------------------------")?;
    writeln!(writer)?;
    Ok(())
}

/// Tokenizes every `*.jsonl` shard under `data_path` with the pretrained
/// tokenizer at `model_path`, writing one tokenized shard per input file
/// plus a `dataset_info.json` manifest under `output_path`.
pub fn tokenize(options: &TokenizeOptions) -> Result<()> {
    let files = dataset::jsonl_files(&options.data_path)?;
    if files.is_empty() {
        bail!(
            "no .jsonl files found under '{}'",
            options.data_path.display()
        );
    }

    let tokenizer = BatchTokenizer::from_pretrained(&options.model_path, options.max_seq_len)?;
    std::fs::create_dir_all(&options.output_path)
        .with_context(|| format!("couldn't create '{}'", options.output_path.display()))?;

    let mut num_examples = 0;
    for file in &files {
        tracing::info!(path = %file.display(), "Tokenizing shard");
        let records = dataset::read_records(file)?;
        let tokenized =
            dataset::map_batched(records, options.batch_size, options.num_proc, |batch| {
                let texts = batch.iter().map(|r| r.text.clone()).collect();
                tokenizer.encode_batch(texts)
            })?;
        num_examples += tokenized.len();

        let file_name = file
            .file_name()
            .with_context(|| format!("no file name for '{}'", file.display()))?;
        let shard_path = options.output_path.join(file_name);
        dataset::write_shard(&shard_path, &tokenized)?;
        tracing::debug!(path = %shard_path.display(), examples = tokenized.len(), "Wrote shard");
    }

    dataset::write_dataset_info(
        &options.output_path,
        &DatasetInfo {
            num_examples,
            num_shards: files.len(),
            max_seq_len: options.max_seq_len,
        },
    )?;
    tracing::info!(
        shards = files.len(),
        examples = num_examples,
        output = %options.output_path.display(),
        "Saved tokenized dataset"
    );
    Ok(())
}
