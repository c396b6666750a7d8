//! In-memory gateway serving fixture data.

use mimosa_snmp::{Error, ErrorStatus, Gateway, Oid, Result, Value, VarBind};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Mutex;

/// A request the gateway received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Get(Oid),
    GetNext(Oid),
}

impl Request {
    pub fn oid(&self) -> &Oid {
        match self {
            Request::Get(oid) | Request::GetNext(oid) => oid,
        }
    }
}

/// How a request under an injected prefix fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// Error indication, as for an unreachable agent.
    Transport,
    /// Error status in the response PDU.
    Status(ErrorStatus),
    /// Never answers.
    Stall,
}

/// Serves GET and GETNEXT from a sorted map, like a well-behaved agent.
pub struct FixtureGateway {
    target: String,
    data: BTreeMap<Oid, Value>,
    failures: Vec<(Oid, Failure)>,
    requests: Mutex<Vec<Request>>,
}

impl FixtureGateway {
    pub fn new(data: BTreeMap<Oid, Value>) -> Self {
        Self {
            target: "10.0.0.5".into(),
            data,
            failures: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request whose identifier falls under `prefix`.
    pub fn fail_under(mut self, prefix: Oid, failure: Failure) -> Self {
        self.failures.push((prefix, failure));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Whether any request touched an identifier under `prefix`.
    pub fn touched(&self, prefix: &Oid) -> bool {
        self.requests()
            .iter()
            .any(|r| r.oid().starts_with(prefix) || prefix.starts_with(r.oid()))
    }

    async fn check(&self, request: Request) -> Result<()> {
        let oid = request.oid().clone();
        self.requests.lock().unwrap().push(request);

        let failure = self
            .failures
            .iter()
            .find(|(prefix, _)| oid.starts_with(prefix))
            .map(|(_, f)| *f);
        match failure {
            None => Ok(()),
            Some(Failure::Transport) => Err(Error::Transport {
                target: self.target.as_str().into(),
                message: "no route to host".into(),
            }),
            Some(Failure::Status(status)) => Err(Error::Snmp {
                target: self.target.as_str().into(),
                status,
                index: 1,
                oid: Some(oid),
            }),
            Some(Failure::Stall) => std::future::pending::<Result<()>>().await,
        }
    }
}

impl Gateway for FixtureGateway {
    async fn get(&self, oid: &Oid) -> Result<VarBind> {
        self.check(Request::Get(oid.clone())).await?;
        let value = self.data.get(oid).cloned().unwrap_or(Value::NoSuchObject);
        Ok(VarBind::new(oid.clone(), value))
    }

    async fn get_next(&self, oid: &Oid) -> Result<VarBind> {
        self.check(Request::GetNext(oid.clone())).await?;
        let next = self
            .data
            .range((Bound::Excluded(oid.clone()), Bound::Unbounded))
            .next();
        Ok(match next {
            Some((next_oid, value)) => VarBind::new(next_oid.clone(), value.clone()),
            None => VarBind::new(oid.clone(), Value::EndOfMibView),
        })
    }

    fn target(&self) -> &str {
        &self.target
    }
}
