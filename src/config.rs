use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub public_url: String,
    pub mongodb_uri: String,
    pub collection: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            public_url: "http://localhost:3000".to_string(),
            mongodb_uri: "mongodb://localhost:27017/formulario".to_string(),
            collection: "usuarios".to_string(),
            max_body_size: 100 * 1024,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset variables take
    /// the defaults of [`Config::default`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("FORMULARIO_HOST", &defaults.host.to_string())
            .parse()
            .map_err(|e| format!("Invalid FORMULARIO_HOST: {e}"))?;

        let port: u16 = env_or("FORMULARIO_PORT", &defaults.port.to_string())
            .parse()
            .map_err(|e| format!("Invalid FORMULARIO_PORT: {e}"))?;

        let public_url = env_or("FORMULARIO_PUBLIC_URL", &format!("http://localhost:{port}"));

        let mongodb_uri = env_or("FORMULARIO_MONGODB_URI", &defaults.mongodb_uri);
        if mongodb_uri.trim().is_empty() {
            return Err("Invalid FORMULARIO_MONGODB_URI: must not be empty".to_string());
        }

        let collection = env_or("FORMULARIO_COLLECTION", &defaults.collection);
        if collection.trim().is_empty() {
            return Err("Invalid FORMULARIO_COLLECTION: must not be empty".to_string());
        }

        let max_body_size: usize = env_or(
            "FORMULARIO_MAX_BODY_SIZE",
            &defaults.max_body_size.to_string(),
        )
        .parse()
        .map_err(|e| format!("Invalid FORMULARIO_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMULARIO_LOG_LEVEL", &defaults.log_level);

        Ok(Config {
            host,
            port,
            public_url,
            mongodb_uri,
            collection,
            max_body_size,
            log_level,
        })
    }
}
