use std::env;
use std::net::SocketAddr;

use crate::entities::{Pricing, DISTANCE_CHARGE, DISTANCE_INCREMENT, INITIAL_CHARGE};
use crate::error::{config_error, Error};

pub const LISTEN_ADDR_VAR: &str = "FARE_LISTEN_ADDR";
pub const INITIAL_CHARGE_VAR: &str = "FARE_INITIAL_CHARGE";
pub const DISTANCE_CHARGE_VAR: &str = "FARE_DISTANCE_CHARGE";
pub const DISTANCE_INCREMENT_VAR: &str = "FARE_DISTANCE_INCREMENT";

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub pricing: Pricing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(DEFAULT_LISTEN_ADDR),
            pricing: Pricing::default(),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let var = |key: &str| -> Result<Option<String>, Error> {
            match lookup(key) {
                Ok(value) => Ok(Some(value)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(err) => Err(err.into()),
            }
        };

        let listen_addr = match var(LISTEN_ADDR_VAR)? {
            Some(value) => value.parse().map_err(|_| {
                config_error(format!("{} is not a socket address: {:?}", LISTEN_ADDR_VAR, value))
            })?,
            None => SocketAddr::from(DEFAULT_LISTEN_ADDR),
        };

        let pricing = Pricing::new(
            var(INITIAL_CHARGE_VAR)?.unwrap_or_else(|| INITIAL_CHARGE.to_string()),
            var(DISTANCE_CHARGE_VAR)?.unwrap_or_else(|| DISTANCE_CHARGE.to_string()),
            var(DISTANCE_INCREMENT_VAR)?.unwrap_or_else(|| DISTANCE_INCREMENT.to_string()),
        )?;

        Ok(Self {
            listen_addr,
            pricing,
        })
    }
}
