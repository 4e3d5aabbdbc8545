use std::error::Error;

use clap::Args;

use super::ModelArgs;

#[derive(Args, Debug)]
pub struct NameArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

pub fn run(args: &NameArgs) -> Result<(), Box<dyn Error>> {
    println!("{}", args.model.helper()?.name());
    Ok(())
}
