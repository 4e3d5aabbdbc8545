use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use svj_helper::{load_model, ModelHelper};
use tracing::info;

pub mod delphes;
pub mod ids;
pub mod name;
pub mod settings;

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// YAML model configuration.
    #[arg(long)]
    pub config: PathBuf,
}

impl ModelArgs {
    pub fn helper(&self) -> Result<ModelHelper, Box<dyn Error>> {
        let params = load_model(&self.config)?;
        let helper = ModelHelper::new(params)?;
        info!(model = %helper.name(), config = %self.config.display(), "loaded model");
        Ok(helper)
    }
}

/// Writes `text` to `out`, creating parent directories, or prints it.
pub fn emit(text: &str, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}
