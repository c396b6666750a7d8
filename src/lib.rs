// The Error enum carries OIDs inline so a failed view says exactly what was asked for.
#![allow(clippy::result_large_err)]

//! # mimosa-snmp
//!
//! Read-only SNMP facts normalizer for Mimosa radios.
//!
//! ## Features
//!
//! - B and C series (point-to-point) and A series (point-to-multipoint) radios
//! - One vendor-neutral schema for facts, interfaces, addressing, wireless
//!   settings, DNS servers and services
//! - Per-family identifier registries and code tables as static data
//! - Reassembly of flat vendor table walks into per-index records
//! - Async API over any request/response [`Gateway`]
//!
//! ## Quick Start
//!
//! The crate does not speak the wire protocol itself; bring a [`Gateway`]
//! backed by an SNMP client.
//!
//! ```rust,no_run
//! use mimosa_snmp::{Driver, Gateway};
//! use std::time::Duration;
//!
//! async fn inventory(gateway: impl Gateway) -> Result<(), mimosa_snmp::Error> {
//!     let driver = Driver::builder("192.168.1.20", "public")
//!         .family("b_c_series")
//!         .timeout(Duration::from_secs(5))
//!         .build(gateway)?;
//!
//!     match driver.get_facts().await {
//!         Ok(facts) => println!("{} running {}", facts.model, facts.os_version),
//!         Err(e) => eprintln!("{e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Each view operation returns either the complete view or a single
//! [`ViewError`]; a value the radio simply does not have takes its type
//! default instead of failing the view.

pub mod decode;
pub mod driver;
pub mod enums;
pub mod error;
pub mod family;
pub mod format;
pub mod gateway;
pub mod oid;
pub mod reassemble;
pub mod registry;
pub mod value;
pub mod varbind;
pub mod view;
pub mod walk;

pub use driver::{DEFAULT_TIMEOUT, Driver, DriverBuilder, DriverConfig};
pub use error::{Error, ErrorStatus, Result, ViewError, ViewResult, WalkAbortReason};
pub use family::HardwareFamily;
pub use gateway::Gateway;
pub use oid::Oid;
pub use registry::Field;
pub use value::Value;
pub use varbind::VarBind;
pub use view::{
    DnsServers, Facts, Interface, Interfaces, InterfacesIp, Services, View, WirelessSettings,
};
