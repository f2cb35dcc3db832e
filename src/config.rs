use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub slow_statement_secs: u64,
    /// 强制 `sslmode=require`
    pub require_tls: bool,
}

impl AppConfig {
    /// 加载顺序：默认值 -> config/invoice-dashboard.toml -> APP_* 环境变量 -> DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    pub fn from_sources(env: Environment, database_url: Option<String>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "postgres://localhost/invoices")?
            .set_default("database.max_connections", 20)?
            .set_default("database.acquire_timeout_secs", 10)?
            .set_default("database.slow_statement_secs", 5)?
            .set_default("database.require_tls", true)?
            .add_source(File::with_name("config/invoice-dashboard").required(false))
            .add_source(env)
            .set_override_option("database.url", database_url)?
            .build()?
            .try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// 日志中隐藏连接串里的密码
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme), Some(at)) if at > scheme => {
                let credentials = &self.url[scheme + 3..at];
                match credentials.find(':') {
                    Some(colon) => format!(
                        "{}{}:***{}",
                        &self.url[..scheme + 3],
                        &credentials[..colon],
                        &self.url[at..]
                    ),
                    None => self.url.clone(),
                }
            }
            _ => self.url.clone(),
        }
    }
}
