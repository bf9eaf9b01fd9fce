use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        check::check,
        init::init,
        shell::{appointments, documents, routes, tabs},
        translate::{keys, translate},
    },
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to report and the problem count
/// - `Err` if the command fails (e.g., config not found, parse errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::T(cmd)) => translate(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Tabs(cmd)) => tabs(cmd),
        Some(Command::Routes(cmd)) => routes(cmd),
        Some(Command::Documents(cmd)) => documents(cmd),
        Some(Command::Appointments(cmd)) => appointments(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
