//! Command-line and environment configuration
//!
//! Every flag can also come from the environment (or a `.env` file in the
//! working directory, loaded before parsing).

use std::net::{IpAddr, SocketAddr};

use clap::Args;
use shipview_server::db::DEFAULT_MAX_CONNECTIONS;
use shipview_server::{AllowedOrigins, DatabaseConfig, ServerConfig};

/// Database connection settings
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Full connection URL; overrides the individual --db-* options
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "shipview")]
    pub db_name: String,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Maximum pooled connections
    #[arg(
        long,
        env = "DB_POOL_SIZE",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            name: self.db_name.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            max_connections: self.pool_size,
        }
    }
}

/// Listener and browser-access settings
#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Allowed browser origin (prefix match); repeat or comma-separate.
    /// Defaults to the dashboard's deployed and local dev origins.
    #[arg(long = "allowed-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl HttpArgs {
    pub fn to_config(&self) -> ServerConfig {
        let origins: Vec<&str> = self
            .allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect();

        let allowed_origins = if origins.is_empty() {
            AllowedOrigins::default()
        } else {
            AllowedOrigins::new(origins)
        };

        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            allowed_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        db: DatabaseArgs,
        #[command(flatten)]
        http: HttpArgs,
    }

    #[test]
    fn explicit_flags() {
        let cli = TestCli::parse_from([
            "shipview",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--pool-size",
            "4",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--allowed-origin",
            "https://a.example,https://b.example",
        ]);

        let db = cli.db.to_config();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 6543);
        assert_eq!(db.max_connections, 4);

        let server = cli.http.to_config();
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            server.allowed_origins.as_slice(),
            &["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let parsed = TestCli::try_parse_from(["shipview", "--pool-size", "0"]);
        assert!(parsed.is_err());

        let cli = TestCli::try_parse_from(["shipview", "--pool-size", "1"]).unwrap();
        assert_eq!(cli.db.to_config().max_connections, 1);
    }

    #[test]
    fn empty_origin_list_uses_defaults() {
        let http = HttpArgs {
            host: "0.0.0.0".parse().unwrap(),
            port: 3001,
            allowed_origins: vec![" ".into()],
        };
        assert_eq!(http.to_config().allowed_origins.as_slice().len(), 3);
    }
}
