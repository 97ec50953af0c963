pub mod loader;
pub mod normalizer;
pub mod summary;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Report;
use std::path::PathBuf;

/// Full analysis pass: load and concatenate the input files, normalize
/// rows, compute the five summary tables.
pub fn run_pipeline(paths: &[PathBuf], cfg: &Config) -> AppResult<Report> {
    let table = loader::load_files(paths)?;
    let data = normalizer::normalize(&table, &cfg.date_format);
    Ok(summary::build_report(&data))
}
