use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
        };
        Ok(Self { server })
    }
}

pub struct ServerConfig {
    pub port: u16,
}
