use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path: show_path,
        check,
        init,
    } = cmd
    {
        if *show_path {
            println!("{}", path.display());
        }

        if *init {
            if path.exists() {
                warning(format!(
                    "Configuration file already exists: {}",
                    path.display()
                ));
            } else {
                Config::default().save_to(path)?;
                success(format!("Configuration file created: {}", path.display()));
            }
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use)",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete");
                } else {
                    for key in missing {
                        warning(format!("Missing field '{key}' (default value in use)"));
                    }
                }
            }
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
