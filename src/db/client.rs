//! Per-operation connection factory
//!
//! Every Execute / Load opens a fresh connection, runs exactly one statement
//! and drops the client. No pooling, no reuse, no retry: dropping the client
//! on any exit path closes the connection.

use crate::config::DbConfig;
use thiserror::Error;
use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

/// The database is unreachable or rejected the credentials.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to reach {host}:{port}: {source}")]
    Tcp {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("handshake with {host}:{port} failed: {source}")]
    Handshake {
        host: String,
        port: u16,
        #[source]
        source: tiberius::error::Error,
    },
}

/// A live connection, valid for a single statement's lifetime.
pub type Connection = Client<Compat<TcpStream>>;

/// Open a fresh connection for one operation.
pub async fn connect(cfg: &DbConfig) -> Result<Connection, ConnectError> {
    let mut config = Config::new();
    config.host(&cfg.host);
    config.port(cfg.port);
    config.database(&cfg.database);
    config.authentication(AuthMethod::sql_server(&cfg.user, &cfg.password));
    config.trust_cert();
    config.encryption(tiberius::EncryptionLevel::NotSupported);

    let tcp = TcpStream::connect(config.get_addr())
        .await
        .map_err(|source| ConnectError::Tcp {
            host: cfg.host.clone(),
            port: cfg.port,
            source,
        })?;
    tcp.set_nodelay(true).map_err(|source| ConnectError::Tcp {
        host: cfg.host.clone(),
        port: cfg.port,
        source,
    })?;

    let client = Client::connect(config, tcp.compat_write())
        .await
        .map_err(|source| ConnectError::Handshake {
            host: cfg.host.clone(),
            port: cfg.port,
            source,
        })?;

    Ok(client)
}
