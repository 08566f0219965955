use std::path::PathBuf;

use anyhow::Result;
use api_generator::Config;
use clap::Parser;
use log::info;

/// Converts a protobuf FileDescriptorSet into Type (et al) objects.
#[derive(Debug, Parser)]
#[command(name = "api-generator", version)]
struct Command {
    /// The input file containing a FileDescriptorSet.
    #[arg(short, long)]
    input: PathBuf,
    /// The output file pattern where '{name}' will be substituted with the type name.
    #[arg(short, long)]
    output: String,
    /// Also write an Api record per service.
    #[arg(long)]
    services: bool,
    /// Keep top-level extension fields (they are translated but not written).
    #[arg(long)]
    extensions: bool,
    /// Also write enums declared inside messages.
    #[arg(long)]
    nested_enums: bool,
}

fn main() {
    env_logger::init();

    if let Err(error) = faillible_main() {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }
}

fn faillible_main() -> Result<()> {
    let command = Command::parse();

    let mut config = Config::new();
    config
        .emit_services(command.services)
        .collect_extensions(command.extensions)
        .nested_enums(command.nested_enums);

    let written = api_generator_cli::run(&config, &command.input, &command.output)?;
    info!("wrote {} records to {}", written, command.output);

    Ok(())
}
