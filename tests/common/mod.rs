//! Shared test infrastructure for mimosa-snmp.
//!
//! Provides FixtureGateway (in-memory agent), MIB fixtures for one radio of
//! each family, and driver constructors.

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod gateway;

pub use fixtures::{ptmp_radio, ptp_radio};
pub use gateway::{Failure, FixtureGateway, Request};

use mimosa_snmp::{Driver, HardwareFamily};
use std::time::Duration;

/// Timeout used by test drivers.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

pub fn driver(family: HardwareFamily, gateway: FixtureGateway) -> Driver<FixtureGateway> {
    Driver::builder("10.0.0.5", "public")
        .hardware_family(family)
        .timeout(TEST_TIMEOUT)
        .build(gateway)
        .unwrap()
}

/// Driver for a B5 serving [`ptp_radio`].
pub fn ptp_driver() -> Driver<FixtureGateway> {
    driver(HardwareFamily::PointToPoint, FixtureGateway::new(ptp_radio()))
}

/// Driver for an A5 serving [`ptmp_radio`].
pub fn ptmp_driver() -> Driver<FixtureGateway> {
    driver(
        HardwareFamily::PointToMultipoint,
        FixtureGateway::new(ptmp_radio()),
    )
}
