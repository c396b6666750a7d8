//! Driver builder and configuration.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::family::HardwareFamily;
use crate::gateway::Gateway;

use super::Driver;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Driver configuration, fixed at construction.
///
/// Built by [`DriverBuilder`]; read it back through [`Driver::config`].
#[derive(Clone)]
pub struct DriverConfig {
    /// Address or name of the radio.
    pub host: String,
    /// Community string.
    pub community: Bytes,
    pub family: HardwareFamily,
    /// Budget for each single round trip (default: 60 seconds)
    pub timeout: Duration,
    /// Accepted for compatibility with other device drivers; never sent.
    pub username: Option<String>,
    /// Accepted for compatibility with other device drivers; never sent.
    pub password: Option<String>,
    /// Maximum rows from a single walk (default: None/unlimited)
    pub max_walk_results: Option<usize>,
}

impl fmt::Debug for DriverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverConfig")
            .field("host", &self.host)
            .field("community", &"<redacted>")
            .field("family", &self.family)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_walk_results", &self.max_walk_results)
            .finish()
    }
}

enum FamilyChoice {
    Name(String),
    Known(HardwareFamily),
}

/// Builder for [`Driver`].
///
/// ```
/// use std::time::Duration;
/// use mimosa_snmp::{DriverBuilder, HardwareFamily};
///
/// let builder = DriverBuilder::new("10.0.0.5", "public")
///     .family("b_c_series")
///     .timeout(Duration::from_secs(5));
///
/// let builder = DriverBuilder::new("10.0.0.6", "public")
///     .hardware_family(HardwareFamily::PointToMultipoint)
///     .max_walk_results(1000);
/// ```
pub struct DriverBuilder {
    host: String,
    community: Bytes,
    family: Option<FamilyChoice>,
    timeout: Duration,
    username: Option<String>,
    password: Option<String>,
    max_walk_results: Option<usize>,
}

impl DriverBuilder {
    /// Create a new driver builder.
    pub fn new(host: impl Into<String>, community: impl AsRef<[u8]>) -> Self {
        Self {
            host: host.into(),
            community: Bytes::copy_from_slice(community.as_ref()),
            family: None,
            timeout: DEFAULT_TIMEOUT,
            username: None,
            password: None,
            max_walk_results: None,
        }
    }

    /// Select the hardware family by its configuration name
    /// (`"a_series"` or `"b_c_series"`). Checked by [`build`](Self::build).
    pub fn family(mut self, name: impl Into<String>) -> Self {
        self.family = Some(FamilyChoice::Name(name.into()));
        self
    }

    /// Select the hardware family.
    pub fn hardware_family(mut self, family: HardwareFamily) -> Self {
        self.family = Some(FamilyChoice::Known(family));
        self
    }

    /// Set the per-request timeout (default: 60 seconds).
    ///
    /// Applies to every single GET and GETNEXT. A walk gets the budget once
    /// per row, not once for the whole walk.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Abort any walk that returns more than `limit` rows.
    ///
    /// Guards against agents that never leave a subtree. Default: unlimited.
    pub fn max_walk_results(mut self, limit: usize) -> Self {
        self.max_walk_results = Some(limit);
        self
    }

    fn validate(&self) -> Result<HardwareFamily> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        match &self.family {
            Some(FamilyChoice::Known(family)) => Ok(*family),
            Some(FamilyChoice::Name(name)) => name.parse(),
            None => Err(Error::Config("hardware family not set".into())),
        }
    }

    /// Validate the configuration and bind it to `gateway`.
    ///
    /// Fails with [`Error::Config`] for an unknown family, a missing family,
    /// an empty host or a zero timeout; no driver is produced.
    pub fn build<G: Gateway>(self, gateway: G) -> Result<Driver<G>> {
        let family = self.validate()?;
        let config = DriverConfig {
            host: self.host,
            community: self.community,
            family,
            timeout: self.timeout,
            username: self.username,
            password: self.password,
            max_walk_results: self.max_walk_results,
        };
        tracing::debug!(target: "mimosa_snmp::driver", { snmp.target = %config.host, snmp.family = %config.family, timeout = ?config.timeout }, "driver configured");
        Ok(Driver::new(gateway, config))
    }
}
