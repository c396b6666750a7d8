//! Subtree walks over GETNEXT.
//!
//! A walk starts at a subtree root and repeatedly asks for the next
//! identifier until the agent answers with something outside the subtree or
//! signals `endOfMibView`. Agents must return identifiers in strictly
//! increasing order; one that does not would loop forever, so the walk
//! aborts on the first violation.

use std::time::Duration;

use crate::error::{Error, Result, WalkAbortReason};
use crate::gateway::{Gateway, bounded};
use crate::oid::Oid;
use crate::value::Value;
use crate::varbind::VarBind;

/// One row of a table walk: the entity index and its raw value.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkRow {
    /// Trailing index component of the row's identifier.
    pub index: u32,
    pub value: Value,
}

impl WalkRow {
    pub fn new(index: u32, value: impl Into<Value>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

impl From<VarBind> for WalkRow {
    fn from(vb: VarBind) -> Self {
        Self {
            index: vb.oid.index().unwrap_or_default(),
            value: vb.value,
        }
    }
}

/// Walk of one subtree.
///
/// ```no_run
/// # use mimosa_snmp::{Gateway, Oid};
/// # use mimosa_snmp::walk::Walk;
/// # async fn example(gateway: &impl Gateway) -> mimosa_snmp::Result<()> {
/// let if_descr = Oid::parse("1.3.6.1.2.1.2.2.1.2")?;
/// let mut walk = Walk::new(gateway, if_descr);
/// while let Some(vb) = walk.next().await {
///     println!("{}", vb?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Walk<'a, G> {
    gateway: &'a G,
    base_oid: Oid,
    current_oid: Oid,
    last: Option<Oid>,
    max_results: Option<usize>,
    timeout: Option<Duration>,
    count: usize,
    done: bool,
}

impl<'a, G: Gateway> Walk<'a, G> {
    /// Walk the subtree rooted at `oid`.
    pub fn new(gateway: &'a G, oid: Oid) -> Self {
        Self {
            gateway,
            base_oid: oid.clone(),
            current_oid: oid,
            last: None,
            max_results: None,
            timeout: None,
            count: 0,
            done: false,
        }
    }

    /// Abort with [`WalkAbortReason::LimitExceeded`] once more than `max`
    /// rows have been returned.
    pub fn max_results(mut self, max: Option<usize>) -> Self {
        self.max_results = max;
        self
    }

    /// Bound every GETNEXT round trip by `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn abort(&mut self, oid: Oid, reason: WalkAbortReason) -> Error {
        self.done = true;
        tracing::debug!(target: "mimosa_snmp::walk", { snmp.oid = %self.base_oid, snmp.rows = self.count, %reason }, "walk aborted");
        Error::WalkAborted {
            target: self.gateway.target().into(),
            oid,
            reason,
        }
    }

    async fn request(&self) -> Result<VarBind> {
        let request = self.gateway.get_next(&self.current_oid);
        match self.timeout {
            Some(timeout) => bounded(self.gateway.target(), timeout, request).await,
            None => request.await,
        }
    }

    /// Next varbind in the subtree, or `None` when the walk is complete.
    ///
    /// After an error the walk is finished and returns `None`.
    pub async fn next(&mut self) -> Option<Result<VarBind>> {
        if self.done {
            return None;
        }

        let vb = match self.request().await {
            Ok(vb) => vb,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if matches!(vb.value, Value::EndOfMibView) || !vb.oid.starts_with(&self.base_oid) {
            self.done = true;
            return None;
        }

        if let Some(prev) = &self.last
            && vb.oid <= *prev
        {
            return Some(Err(self.abort(vb.oid, WalkAbortReason::NonIncreasing)));
        }

        if let Some(max) = self.max_results
            && self.count >= max
        {
            return Some(Err(self.abort(vb.oid, WalkAbortReason::LimitExceeded)));
        }

        self.last = Some(vb.oid.clone());
        self.current_oid = vb.oid.clone();
        self.count += 1;
        Some(Ok(vb))
    }

    /// Collect all remaining varbinds.
    pub async fn collect(mut self) -> Result<Vec<VarBind>> {
        let mut results = Vec::new();
        while let Some(result) = self.next().await {
            results.push(result?);
        }
        tracing::trace!(target: "mimosa_snmp::walk", { snmp.oid = %self.base_oid, snmp.rows = results.len() }, "walk complete");
        Ok(results)
    }

    /// Collect all remaining rows as `(index, value)` pairs.
    pub async fn rows(self) -> Result<Vec<WalkRow>> {
        Ok(self.collect().await?.into_iter().map(WalkRow::from).collect())
    }
}
