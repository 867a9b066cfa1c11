use std::net::SocketAddr;

use pulsesim_core::error::{PulseSimError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PulseSimError::BadRequest(
                "version must be 1".into(),
            ));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            PulseSimError::BadRequest(format!(
                "server.listen must be a valid socket address: {e}"
            ))
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
