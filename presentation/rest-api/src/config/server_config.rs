use std::env;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    ///
    /// A non-numeric SERVICE_PORT falls back to the default.
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        Self { ip, port }
    }

    /// Bind address as "ip:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_ip_and_port_into_bind_address() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 9000,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
