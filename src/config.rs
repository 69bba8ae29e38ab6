use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Scores receipts over HTTP and remembers the points until shutdown.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "RECEIPTS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "RECEIPTS_PORT", default_value_t = 80)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
