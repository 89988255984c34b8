pub mod config;
pub mod dataset;
pub mod filter;
pub mod ranges;
pub mod run;
pub mod tokenizer;
