use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use svj_helper::serde_io::summary_to_json;

use super::{emit, ModelArgs};

#[derive(Args, Debug)]
pub struct IdsArgs {
    #[command(flatten)]
    pub model: ModelArgs,
    /// Destination file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &IdsArgs) -> Result<(), Box<dyn Error>> {
    let summary = args.model.helper()?.summary()?;
    let mut json = summary_to_json(&summary)?;
    json.push('\n');
    emit(&json, args.out.as_deref())
}
