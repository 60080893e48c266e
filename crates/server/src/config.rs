//! Server settings, from flags or the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use frontpage_core::{FRONT_PAGE_URL, FetchConfig, FrontPageConfig};

/// Serve the Hacker News front page as ranked JSON
#[derive(Parser, Debug, Clone)]
#[command(name = "frontpage-server")]
#[command(version)]
#[command(about = "Serve Hacker News front page stories as JSON", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Page to scrape on every request
    #[arg(long, env = "UPSTREAM_URL", default_value = FRONT_PAGE_URL, value_name = "URL")]
    pub upstream_url: String,

    /// Origins allowed by CORS, comma separated (default: any)
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', value_name = "ORIGINS")]
    pub allowed_origins: Vec<String>,

    /// Upstream fetch timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT", default_value = "30", value_name = "SECS")]
    pub fetch_timeout: u64,

    /// Whole request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value = "60", value_name = "SECS")]
    pub request_timeout: u64,

    /// Directory with the web client, served under /app
    #[arg(long, env = "WEB_DIR", value_name = "DIR")]
    pub web_dir: Option<PathBuf>,

    /// Custom User-Agent for upstream requests
    #[arg(long, env = "USER_AGENT", value_name = "UA")]
    pub user_agent: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Scraper settings derived from the server flags.
    pub fn front_page(&self) -> FrontPageConfig {
        let mut fetch = FetchConfig { timeout: self.fetch_timeout, ..Default::default() };
        if let Some(user_agent) = &self.user_agent {
            fetch.user_agent = user_agent.clone();
        }

        FrontPageConfig { url: self.upstream_url.clone(), fetch, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["frontpage-server", "--upstream-url", FRONT_PAGE_URL]).unwrap();
        assert_eq!(config.fetch_timeout, 30);
        assert_eq!(config.front_page().url, FRONT_PAGE_URL);
        assert_eq!(config.front_page().fetch.timeout, 30);
    }

    #[test]
    fn test_origins_are_split() {
        let config = ServerConfig::try_parse_from([
            "frontpage-server",
            "--allowed-origins",
            "http://localhost:3000,https://example.com",
        ])
        .unwrap();

        assert_eq!(config.allowed_origins, vec!["http://localhost:3000", "https://example.com"]);
    }

    #[test]
    fn test_addr() {
        let config =
            ServerConfig::try_parse_from(["frontpage-server", "--host", "127.0.0.1", "--port", "9090"]).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_user_agent_override() {
        let config = ServerConfig::try_parse_from(["frontpage-server", "--user-agent", "probe/1"]).unwrap();
        assert_eq!(config.front_page().fetch.user_agent, "probe/1");
    }
}
