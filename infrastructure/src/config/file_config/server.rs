//! HTTP server configuration from TOML (`[server]` section)

use super::lenient_string;
use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind (default: "127.0.0.1")
    #[serde(deserialize_with = "lenient_string")]
    pub host: String,
    /// Port to listen on (default: 5000)
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl FileServerConfig {
    /// `host:port` string suitable for binding a listener.
    ///
    /// IPv6 literals are bracketed (`[::1]:5000`); hostnames are left for
    /// the resolver.
    pub fn bind_address(&self) -> String {
        let host = self.host.trim().trim_start_matches('[').trim_end_matches(']');
        if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn on(host: &str, port: u16) -> FileServerConfig {
        FileServerConfig {
            host: host.to_string(),
            port,
        }
    }

    #[test]
    fn test_ipv4_bind_address() {
        assert_eq!(on("0.0.0.0", 8080).bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_ipv6_bind_address_is_bracketed() {
        let addr = on("::1", 5000).bind_address();
        assert_eq!(addr, "[::1]:5000");
        assert!(addr.parse::<SocketAddr>().is_ok());
    }

    #[test]
    fn test_already_bracketed_ipv6_is_not_doubled() {
        assert_eq!(on("[::]", 80).bind_address(), "[::]:80");
    }

    #[test]
    fn test_hostname_bind_address() {
        assert_eq!(on("localhost", 5000).bind_address(), "localhost:5000");
    }
}
