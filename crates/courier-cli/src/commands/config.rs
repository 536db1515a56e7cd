//! Configuration management commands.

use clap::Args;
use courier_core::config::Config;
use courier_core::paths;

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show configuration
    Show,

    /// Show configuration file path
    Path,

    /// Validate configuration
    Validate,

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the config command.
pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load_or_default();
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }

        ConfigCommand::Path => {
            let path = paths::config_file()?;
            println!("{}", path.display());
        }

        ConfigCommand::Validate => match Config::load_default() {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => anyhow::bail!("Configuration error: {}", e),
            },
            Err(e) => anyhow::bail!("Failed to load config: {}", e),
        },

        ConfigCommand::Init { force } => {
            let path = paths::config_file()?;

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {:?}. Use --force to overwrite.",
                    path
                );
            }

            paths::ensure_dirs()?;

            let config = Config::load_or_default();
            config.save_default()?;

            println!("Created config file: {:?}", path);
        }
    }

    Ok(())
}
