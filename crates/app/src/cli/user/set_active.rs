use backoffice_app::{
    database::{self, Db},
    domain::users::{PgUsersService, UsersService, records::UserUuid},
};
use clap::{ArgAction, Args};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct SetActiveArgs {
    /// User UUID
    #[arg(long)]
    user: Uuid,

    /// Whether the user may log in
    #[arg(long, action = ArgAction::Set)]
    active: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SetActiveArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(Db::new(pool))
        .set_active(UserUuid::from_uuid(args.user), args.active)
        .await
        .map_err(|error| format!("failed to update user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("is_active: {}", user.is_active);

    Ok(())
}
