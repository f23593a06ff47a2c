use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
}

impl Settings {
    /// Built-in defaults, overridden by `APP_`-prefixed environment variables.
    ///
    /// Nested keys are separated by `__`, e.g. `APP_SERVER__PORT=9000`.
    pub fn load() -> Result<Settings, figment::Error> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 8080,
                public_url: None,
            },
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerSettings {
    pub ip: IpAddr,
    pub port: u16,
    /// Base URL used when building links in responses.
    /// Falls back to the scheme and host the request came in on.
    #[serde(default)]
    pub public_url: Option<String>,
}

impl ServerSettings {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}
