use std::path::{Path, PathBuf};

use pharmagen_generate::GenerateOptions;

use crate::CliError;

/// Load generation options from a TOML file, falling back to defaults.
pub fn load_options(path: Option<&Path>) -> Result<GenerateOptions, CliError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            parse_options(&content)
        }
        None => Ok(GenerateOptions::default()),
    }
}

/// Load options, apply command-line overrides and validate the result.
///
/// Nothing is created on disk here, so a bad config leaves the output
/// directory untouched.
pub fn resolve_options(
    config: Option<&Path>,
    out_dir: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<GenerateOptions, CliError> {
    let mut options = load_options(config)?;
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }
    if seed.is_some() {
        options.seed = seed;
    }
    options.validate()?;
    Ok(options)
}

pub fn parse_options(content: &str) -> Result<GenerateOptions, CliError> {
    let options: GenerateOptions = toml::from_str(content)?;
    Ok(options)
}
