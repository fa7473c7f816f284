use backoffice_app::{
    auth::{SHORT_LIVED_TOKEN_TTL, TokenSecret, TokenService},
    database::{self, Db},
    domain::users::{PgUsersService, UsersService, records::UserUuid},
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    /// User the token is issued for
    #[arg(long)]
    user: Uuid,

    /// HS256 signing secret shared with the API server
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    if args.jwt_secret.is_empty() {
        return Err("jwt secret cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(Db::new(pool))
        .get_user(UserUuid::from_uuid(args.user))
        .await
        .map_err(|error| format!("failed to load user: {error}"))?;

    if !user.is_active {
        return Err(format!("user {} is disabled", user.uuid));
    }

    let tokens = TokenService::new(TokenSecret::from(args.jwt_secret), SHORT_LIVED_TOKEN_TTL);

    let issued = tokens
        .issue(&user.email, None)
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("access_token: {}", issued.token);
    println!("expires_at: {}", issued.expires_at);

    Ok(())
}
