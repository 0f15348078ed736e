use std::io::{self, Read};

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bone-renamer",
    version,
    about = "Rename skeleton bones between rig naming conventions"
)]
struct Cli {
    /// Source naming convention (default from settings: mmd_english)
    #[arg(short = 'f', long = "from")]
    from: Option<String>,

    /// Target naming convention (default from settings: blender_rigify)
    #[arg(short = 't', long = "to")]
    to: Option<String>,

    /// Leave finger bones untouched
    #[arg(long = "no-fingers")]
    no_fingers: bool,

    /// Translate Japanese bone names to English instead of converting formats
    #[arg(short = 'j', long = "translate")]
    translate: bool,

    /// Ask the online translator before falling back to the dictionary
    #[arg(long = "online")]
    online: bool,

    /// Seconds to wait for each online translation (0.1 to 10)
    #[arg(long = "timeout")]
    timeout: Option<f64>,

    /// API key (overrides environment variables)
    #[arg(short = 'k', long = "key")]
    key: Option<String>,

    /// Model used for online translation
    #[arg(short = 'm', long = "model")]
    model: Option<String>,

    /// Show the supported naming conventions and exit
    #[arg(long = "show-formats")]
    show_formats: bool,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings")]
    read_settings: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    bone_renamer::logging::init(cli.verbose)?;

    let input = if cli.show_formats {
        None
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    };

    let config = bone_renamer::Config {
        from: cli.from,
        to: cli.to,
        no_fingers: cli.no_fingers,
        translate: cli.translate,
        online: cli.online,
        timeout: cli.timeout,
        key: cli.key,
        model: cli.model,
        settings_path: cli.read_settings,
        show_formats: cli.show_formats,
    };
    let output = bone_renamer::run(config, input).await?;
    println!("{}", output);
    Ok(())
}
