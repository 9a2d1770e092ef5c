use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Lifetime of an issued session token.
    pub token_ttl_minutes: i64,
    pub max_connections: u32,
    /// When set, `submit` refuses orders that still have unpacked items.
    /// Otherwise the status check is advisory only.
    pub enforce_full_pack_on_submit: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let token_ttl_minutes = env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(60);
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let enforce_full_pack_on_submit = env::var("ENFORCE_FULL_PACK_ON_SUBMIT")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            token_ttl_minutes,
            max_connections,
            enforce_full_pack_on_submit,
        })
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
