use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use config::Config;
use hanzi_prep::config::{PrepConfig, find_config_path};
use hanzi_prep::run::{self, TokenizeOptions};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

const BINARY_NAME: &str = "hanzi-prep";

#[derive(Parser)]
#[command(version, subcommand_required = true)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Strip non-Chinese script characters out of a UTF-8 text file
    Clean {
        #[arg(
            short = 'i',
            long = "in",
            value_name = "PATH",
            help = "Filepath to read the input text from"
        )]
        input: PathBuf,
        #[arg(
            short = 'o',
            long = "out",
            value_name = "PATH",
            help = "Filepath to write the cleaned output to; prints to stdout when absent"
        )]
        output: Option<PathBuf>,
    },
    /// Tokenize raw JSONL shards with a pretrained tokenizer and save the
    /// dataset to disk
    Tokenize {
        #[arg(long, value_name = "PATH", help = "Path to the pretrained model")]
        model_path: PathBuf,
        #[arg(long, value_name = "PATH", help = "Directory holding *.jsonl input shards")]
        data_path: PathBuf,
        #[arg(long, value_name = "PATH", help = "Directory to save the tokenized dataset to")]
        output_path: PathBuf,
        #[arg(long, value_name = "LEN", help = "Maximum sequence length")]
        max_seq_len: Option<usize>,
        #[arg(long, value_name = "SIZE", help = "Records per tokenizer batch")]
        batch_size: Option<usize>,
        #[arg(long, value_name = "COUNT", help = "Worker thread count for the batched map")]
        num_proc: Option<usize>,
    },
    /// Generate shell completions
    ShellCompletions {
        #[arg()]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .expect("should be able to initialize the logger");

    let cwd = std::env::current_dir()?;
    let cfg = match find_config_path(&cwd) {
        Some(cfg_path) => {
            let cfg = Config::builder()
                .add_source(config::File::with_name(&cfg_path.to_string_lossy()))
                .build()?;
            let cfg = PrepConfig::deserialize(cfg)?;
            tracing::debug!(?cfg, "Loaded config");
            cfg
        }
        None => PrepConfig::default(),
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Clean { input, output } => run::clean(input, output),
        Command::Tokenize {
            model_path,
            data_path,
            output_path,
            max_seq_len,
            batch_size,
            num_proc,
        } => run::tokenize(&TokenizeOptions {
            model_path,
            data_path,
            output_path,
            max_seq_len: max_seq_len.unwrap_or(cfg.max_seq_len),
            batch_size: batch_size.unwrap_or(cfg.batch_size),
            num_proc: num_proc.unwrap_or(cfg.num_proc),
        }),
        Command::ShellCompletions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, BINARY_NAME, &mut std::io::stdout());
            Ok(())
        }
    }
}
