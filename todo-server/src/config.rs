//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;
use todo_api::PageConfig;

/// Host for the todo page.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Base URL the page prefixes to every API path. Empty means same origin.
    #[arg(long, env = "TODO_API_BASE", default_value = "")]
    pub api_base: String,

    /// Do not serve the in-memory development API (use with an external backend).
    #[arg(long, env = "TODO_NO_DEV_API")]
    pub no_dev_api: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base: String::new(),
            no_dev_api: false,
        }
    }
}

impl ServerConfig {
    /// State injected into the page HTML.
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            api_base: self.api_base.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let parsed = ServerConfig::try_parse_from(["todo-server"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.addr, default.addr);
        assert_eq!(parsed.api_base, default.api_base);
        assert_eq!(parsed.no_dev_api, default.no_dev_api);
    }

    #[test]
    fn parses_flags() {
        let parsed = ServerConfig::try_parse_from([
            "todo-server",
            "--addr",
            "0.0.0.0:8080",
            "--api-base",
            "http://localhost:8000",
            "--no-dev-api",
        ])
        .unwrap();
        assert_eq!(parsed.addr.port(), 8080);
        assert!(parsed.no_dev_api);
        assert_eq!(parsed.page_config().api_base, "http://localhost:8000");
    }
}
