use clap::{Args, Subcommand};

mod create;
mod set_active;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Create a user with a chosen role
    Create(create::CreateUserArgs),

    /// Enable or disable login for a user
    SetActive(set_active::SetActiveArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Create(args) => create::run(args).await,
        UserSubcommand::SetActive(args) => set_active::run(args).await,
    }
}
