use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::{emit, ModelArgs};

#[derive(Args, Debug)]
pub struct DelphesArgs {
    #[command(flatten)]
    pub model: ModelArgs,
    /// Detector card template with `$HV...` placeholders.
    #[arg(long)]
    pub template: PathBuf,
    /// Destination of the filled card.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &DelphesArgs) -> Result<(), Box<dyn Error>> {
    let helper = args.model.helper()?;
    let card = helper.detector_settings_from_file(&args.template)?;
    emit(&card, Some(args.out.as_path()))
}
