use clap::{Parser, ValueEnum};
use shorty_gateway::state::{DEFAULT_BASE_URL, DEFAULT_SHORT_URL_PREFIX};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SHORTY_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SHORTY_GATEWAY_BASE_URL";
pub const SHORT_URL_PREFIX_ENV: &str = "SHORTY_GATEWAY_SHORT_URL_PREFIX";
pub const LOG_FORMAT_ENV: &str = "SHORTY_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shorty-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = SHORT_URL_PREFIX_ENV, default_value = DEFAULT_SHORT_URL_PREFIX)]
    pub short_url_prefix: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
