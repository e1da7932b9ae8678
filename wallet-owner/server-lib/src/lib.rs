mod logging;
mod server_config;
pub(crate) mod services;
mod spawn_server;

pub use crate::{
    logging::{init_logging, LogFormat},
    server_config::ServerConfig,
    spawn_server::spawn_server,
};
