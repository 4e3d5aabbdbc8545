use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::{emit, ModelArgs};

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub model: ModelArgs,
    /// Destination file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SettingsArgs) -> Result<(), Box<dyn Error>> {
    let helper = args.model.helper()?;
    let mut text = helper.simulator_settings().join("\n");
    text.push('\n');
    emit(&text, args.out.as_deref())
}
