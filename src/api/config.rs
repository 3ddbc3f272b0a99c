use std::env;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| match p.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!("PORT '{}' is not a valid port, using {}", p, DEFAULT_PORT);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
