//! Error types for mimosa-snmp.
//!
//! - [`Error`] - every failure a round trip, the registry or normalization can produce
//! - [`ErrorStatus`] - SNMP protocol errors returned by agents (RFC 3416)
//! - [`WalkAbortReason`] - why a subtree walk was abandoned
//! - [`ViewError`] - the single failure value a view operation returns
//!
//! Per-field problems never surface here: a value the device did not return
//! takes its type default inside the view. Only failures that make the whole
//! view indeterminate become a [`ViewError`].
//!
//! ```
//! use mimosa_snmp::{Error, ErrorStatus};
//!
//! fn is_transport(error: &Error) -> bool {
//!     matches!(
//!         error,
//!         Error::Timeout { .. } | Error::Network { .. } | Error::Snmp { .. }
//!     )
//! }
//!
//! let err = Error::Snmp {
//!     target: "10.0.0.5".into(),
//!     status: ErrorStatus::from_i32(2),
//!     index: 1,
//!     oid: None,
//! };
//! assert!(is_transport(&err));
//! assert!(err.is_transport());
//! ```

use std::time::Duration;

use crate::family::HardwareFamily;
use crate::oid::Oid;
use crate::registry::Field;
use crate::view::View;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of one view operation.
pub type ViewResult<T> = std::result::Result<T, ViewError>;

/// Reason a walk operation was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAbortReason {
    /// Device returned an OID that is not greater than the previous OID.
    NonIncreasing,
    /// Walk produced more rows than the configured limit.
    LimitExceeded,
}

impl std::fmt::Display for WalkAbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIncreasing => write!(f, "non-increasing OID"),
            Self::LimitExceeded => write!(f, "walk result limit exceeded"),
        }
    }
}

/// The main error type for all mimosa-snmp operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid driver configuration (unknown hardware family, empty host).
    #[error("configuration error: {0}")]
    Config(Box<str>),

    /// Invalid OID format.
    #[error("invalid OID: {0}")]
    InvalidOid(Box<str>),

    /// The field is not defined for this hardware family.
    #[error("field {field} is not defined for {family}")]
    UnknownField {
        family: HardwareFamily,
        field: Field,
    },

    /// A value required to compute the view was not returned by the device.
    #[error("{field} ({oid}) not available")]
    FieldUnavailable { field: Field, oid: Oid },

    /// An address or mask that cannot be combined into a prefix.
    #[error("invalid {field} value {value:?}")]
    InvalidAddress { field: Field, value: Box<str> },

    /// Request timed out.
    #[error("timeout after {elapsed:?} waiting for {target}")]
    Timeout { target: Box<str>, elapsed: Duration },

    /// Network failure (connection refused, unreachable, etc.)
    #[error("network error communicating with {target}: {source}")]
    Network {
        target: Box<str>,
        #[source]
        source: std::io::Error,
    },

    /// SNMP protocol error from agent.
    #[error("SNMP error from {target}: {status} at index {index}")]
    Snmp {
        target: Box<str>,
        status: ErrorStatus,
        index: u32,
        oid: Option<Oid>,
    },

    /// Any other error indication reported by the gateway.
    #[error("transport error communicating with {target}: {message}")]
    Transport { target: Box<str>, message: Box<str> },

    /// Walk aborted due to agent misbehavior.
    #[error("walk of {oid} aborted for {target}: {reason}")]
    WalkAborted {
        target: Box<str>,
        oid: Oid,
        reason: WalkAbortReason,
    },
}

impl Error {
    /// Whether this error came from the gateway rather than from decoding or
    /// configuration.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. }
                | Error::Network { .. }
                | Error::Snmp { .. }
                | Error::Transport { .. }
                | Error::WalkAborted { .. }
        )
    }
}

/// The failure value of one view operation.
///
/// Carries which view failed and the underlying cause. A view operation
/// returns either a complete view or exactly one of these, never a partial
/// view.
#[derive(Debug, thiserror::Error)]
#[error("error getting {view}: {source}")]
pub struct ViewError {
    /// The view that could not be built.
    pub view: View,
    /// What went wrong.
    #[source]
    pub source: Error,
}

impl ViewError {
    pub(crate) fn new(view: View, source: Error) -> Self {
        Self { view, source }
    }
}

/// SNMP protocol error status codes (RFC 3416).
///
/// Gateways report these through [`Error::Snmp`].
///
/// ```
/// use mimosa_snmp::ErrorStatus;
///
/// let status = ErrorStatus::from_i32(2);
/// assert_eq!(status, ErrorStatus::NoSuchName);
/// assert_eq!(status.as_i32(), 2);
/// assert_eq!(status.to_string(), "noSuchName");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorStatus {
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    /// Unknown or future error status code.
    Unknown(i32),
}

impl ErrorStatus {
    /// Create from raw status code.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            other => {
                tracing::warn!(target: "mimosa_snmp::error", { snmp.error_status = other }, "unknown SNMP error status");
                Self::Unknown(other)
            }
        }
    }

    /// Convert to raw status code.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(code) => *code,
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => write!(f, "noError"),
            Self::TooBig => write!(f, "tooBig"),
            Self::NoSuchName => write!(f, "noSuchName"),
            Self::BadValue => write!(f, "badValue"),
            Self::ReadOnly => write!(f, "readOnly"),
            Self::GenErr => write!(f, "genErr"),
            Self::NoAccess => write!(f, "noAccess"),
            Self::WrongType => write!(f, "wrongType"),
            Self::WrongLength => write!(f, "wrongLength"),
            Self::WrongEncoding => write!(f, "wrongEncoding"),
            Self::WrongValue => write!(f, "wrongValue"),
            Self::NoCreation => write!(f, "noCreation"),
            Self::InconsistentValue => write!(f, "inconsistentValue"),
            Self::ResourceUnavailable => write!(f, "resourceUnavailable"),
            Self::CommitFailed => write!(f, "commitFailed"),
            Self::UndoFailed => write!(f, "undoFailed"),
            Self::AuthorizationError => write!(f, "authorizationError"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::InconsistentName => write!(f, "inconsistentName"),
            Self::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}
