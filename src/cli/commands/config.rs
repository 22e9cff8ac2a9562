use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand.
///
/// Runs before authorization so a broken `credentials` entry can still be
/// fixed from here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let nothing_requested = !(*print_config || *check || *migrate || *edit_config);

        if *print_config || nothing_requested {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *migrate || *edit_config) && !path.exists() {
            warning(format!(
                "No configuration file at {}; run `phdplanner init` first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            ConfigLogic::migrate(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
            success("Configuration file edited.");
        }
    }

    Ok(())
}
