use backoffice_app::{
    auth::password::hash_password,
    database::{self, Db},
    domain::users::{
        PgUsersService, UsersService,
        data::NewUser,
        records::{Role, UserUuid},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Login email; stored trimmed and lowercased
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    full_name: String,

    /// Optional contact phone
    #[arg(long)]
    phone: Option<String>,

    /// `admin` or `user`
    #[arg(long, default_value = "user")]
    role: Role,

    /// Initial password
    #[arg(long, env = "BACKOFFICE_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.password.is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let password_hash = hash_password(args.password)
        .await
        .map_err(|error| format!("failed to hash password: {error}"))?;

    let user = PgUsersService::new(Db::new(pool))
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: args.email,
            password_hash,
            full_name: args.full_name,
            phone: args.phone,
            role: args.role,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("email: {}", user.email);
    println!("role: {}", user.role);

    Ok(())
}
