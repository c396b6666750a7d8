//! Transport gateway abstraction.
//!
//! The driver never speaks the wire protocol itself. Everything it needs
//! from the network is a single GET or GETNEXT round trip, provided by an
//! implementation of [`Gateway`]. Session handling, retries and credentials
//! all live behind it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::oid::Oid;
use crate::varbind::VarBind;

/// Request/response access to one agent.
///
/// Implementations report failures as [`Error::Timeout`],
/// [`Error::Network`], [`Error::Snmp`] or [`Error::Transport`]. A value the
/// agent does not have is *not* a failure: it comes back as a varbind holding
/// one of the exception values (`noSuchObject`, `noSuchInstance`,
/// `endOfMibView`).
///
/// The driver issues requests one at a time and awaits each before sending
/// the next.
///
/// [`Error::Timeout`]: crate::Error::Timeout
/// [`Error::Network`]: crate::Error::Network
/// [`Error::Snmp`]: crate::Error::Snmp
/// [`Error::Transport`]: crate::Error::Transport
pub trait Gateway: Send + Sync {
    /// Fetch the value of a single identifier.
    fn get(&self, oid: &Oid) -> impl Future<Output = Result<VarBind>> + Send;

    /// Fetch the first identifier lexicographically after `oid`.
    fn get_next(&self, oid: &Oid) -> impl Future<Output = Result<VarBind>> + Send;

    /// Display name of the agent, used in errors and log fields.
    fn target(&self) -> &str;
}

/// Await one round trip, giving up after `timeout`.
pub(crate) async fn bounded<T>(
    target: &str,
    timeout: Duration,
    request: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, request)
        .await
        .map_err(|_| Error::Timeout {
            target: target.into(),
            elapsed: timeout,
        })?
}

impl<G: Gateway> Gateway for Arc<G> {
    fn get(&self, oid: &Oid) -> impl Future<Output = Result<VarBind>> + Send {
        (**self).get(oid)
    }

    fn get_next(&self, oid: &Oid) -> impl Future<Output = Result<VarBind>> + Send {
        (**self).get_next(oid)
    }

    fn target(&self) -> &str {
        (**self).target()
    }
}
