use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration file. Test mode only resolves the path.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_deref(), cli.test)?;

    println!("⚙️  Initializing shiftdesk…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        messages::info("Test mode: configuration file not written");
    } else {
        messages::success("shiftdesk initialization completed");
    }

    Ok(())
}
