#[derive(clap::Args, Clone, Debug)]
pub struct ServerConfig {
    /// Specify the port on which the service will listen for HTTP requests.
    #[arg(
        env = "WALLET_OWNERS_LISTEN_PORT",
        long,
        value_name = "PORT",
        default_value = "5000"
    )]
    pub listen_port: u16,
    /// Specify where wallet owners are stored: "memory://" (in-process, lost on exit),
    /// "sqlite://name.db?mode=rwc" (read+write, create if it doesn't yet exist), "sqlite::memory:",
    /// or "postgres:///database-name".
    /// See https://docs.rs/sqlx/latest/sqlx/postgres/struct.PgConnectOptions.html and
    /// https://docs.rs/sqlx/latest/sqlx/sqlite/struct.SqliteConnectOptions.html for more details.
    /// Note that the `sqlite` and `postgres` cargo features must be enabled, respectively, in order
    /// to support each database type.
    #[arg(
        env = "WALLET_OWNERS_DATABASE_URL",
        long,
        value_name = "URL",
        default_value = "memory://"
    )]
    pub database_url: String,
    /// Specify the maximum number of connections to the database.  Ignored for "memory://", and
    /// forced to 1 for in-memory SQLite, since each SQLite connection would get its own database.
    #[arg(
        name = "database-max-connections",
        env = "WALLET_OWNERS_DATABASE_MAX_CONNECTIONS",
        long,
        value_name = "CONNECTIONS",
        default_value = "10"
    )]
    pub database_max_connections: u32,
}
