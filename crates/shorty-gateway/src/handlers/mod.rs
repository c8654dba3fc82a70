mod health;
mod metrics;
mod url;

pub use health::health_handler;
pub use metrics::top_domains_handler;
pub use url::{redirect_handler, shorten_handler};
