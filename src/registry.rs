//! Identifier registry.
//!
//! Maps logical field names to the wire identifiers that address them on a
//! radio. Each [`HardwareFamily`] has one immutable [`Bundle`]; a field that
//! is absent from a family's bundle is never queried for that family.
//!
//! ```
//! use mimosa_snmp::HardwareFamily;
//! use mimosa_snmp::registry::{Field, resolve};
//!
//! let oid = resolve(HardwareFamily::PointToPoint, Field::WanStatus).unwrap();
//! assert_eq!(oid.to_string(), "1.3.6.1.4.1.43356.2.1.2.3.3.0");
//!
//! // The point-to-multipoint radios have no WAN status object
//! assert!(resolve(HardwareFamily::PointToMultipoint, Field::WanStatus).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::enums::{EnumTable, PTMP_SERVICE_STATE, PTP_SERVICE_STATE};
use crate::error::{Error, Result};
use crate::family::HardwareFamily;
use crate::oid::Oid;

macro_rules! fields {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// Logical name of one managed value or table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Field {
            $($(#[$doc])* $variant,)+
        }

        impl Field {
            /// Every field, in declaration order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The logical name of the field.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }
        }
    };
}

fields! {
    // MIB-II, shared by every family
    /// `sysObjectID.0`, identifies the model.
    SysObjectId => "sys_object_id",
    /// `sysUpTime.0`
    SysUpTime => "sys_uptime",
    /// `ifDescr` column.
    IfDescr => "if_descr",
    /// `ifMtu` column.
    IfMtu => "if_mtu",
    /// `ifSpeed` column, bits per second.
    IfSpeed => "if_speed",
    /// `ifPhysAddress` column.
    IfPhysAddress => "if_phys_address",
    /// `ifAdminStatus` column.
    IfAdminStatus => "if_admin_status",
    /// `ifOperStatus` column.
    IfOperStatus => "if_oper_status",

    // Mimosa device information, shared by every family
    DeviceName => "device_name",
    SerialNumber => "serial_number",
    FirmwareVersion => "firmware_version",
    UnlockCode => "unlock_code",
    RegulatoryDomain => "regulatory_domain",

    // Addressing and DNS, family specific
    LocalIp => "mimosa_local_ip",
    Netmask => "mimosa_netmask",
    PrimaryDnsServer => "primary_dns_server",
    SecondaryDnsServer => "secondary_dns_server",

    // Point-to-point wireless
    WanSsid => "wan_ssid",
    WanStatus => "wan_status",
    WirelessMode => "wireless_mode",
    TdmaMode => "tdma_mode",
    TdmaWindow => "tdma_window",
    TrafficSplit => "traffic_split",
    NetworkMode => "network_mode",
    RecoverySsid => "recovery_ssid",
    LocalSsid => "local_ssid",
    LocalChannel => "local_channel",

    // Point-to-multipoint wireless
    /// SSID table, walked and reassembled.
    SsidTable => "mimosa_ssid_list",
    PtmpWirelessMode => "mimosa_wireless_mode",
    AutoChannel => "mimosa_auto_channel",
    /// Channel and power table, walked and reassembled.
    ChannelPowerTable => "mimosa_channel_power_table",

    // Services
    HttpsStatus => "https_status",
    MgmtVlanStatus => "mgmt_vlan_status",
    MgmtCloudStatus => "mgmt_cloud_status",
    SyslogStatus => "syslog_status",
    MgmtVlanPassthrough => "mgmt_vlan_passthrough",
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::Config(format!("unknown field name {s:?}").into()))
    }
}

/// Identifiers every family answers.
static COMMON: &[(Field, &str)] = &[
    (Field::SysObjectId, ".1.3.6.1.2.1.1.2.0"),
    (Field::SysUpTime, ".1.3.6.1.2.1.1.3.0"),
    (Field::IfDescr, ".1.3.6.1.2.1.2.2.1.2"),
    (Field::IfMtu, ".1.3.6.1.2.1.2.2.1.4"),
    (Field::IfSpeed, ".1.3.6.1.2.1.2.2.1.5"),
    (Field::IfPhysAddress, ".1.3.6.1.2.1.2.2.1.6"),
    (Field::IfAdminStatus, ".1.3.6.1.2.1.2.2.1.7"),
    (Field::IfOperStatus, ".1.3.6.1.2.1.2.2.1.8"),
    (Field::DeviceName, ".1.3.6.1.4.1.43356.2.1.2.1.1.0"),
    (Field::SerialNumber, ".1.3.6.1.4.1.43356.2.1.2.1.2.0"),
    (Field::FirmwareVersion, ".1.3.6.1.4.1.43356.2.1.2.1.3.0"),
    (Field::UnlockCode, ".1.3.6.1.4.1.43356.2.1.2.1.6.0"),
    (Field::RegulatoryDomain, ".1.3.6.1.4.1.43356.2.1.2.1.9.0"),
];

/// Identifier and enumeration bundle for one hardware family.
#[derive(Debug)]
pub struct Bundle {
    /// The family this bundle describes.
    pub family: HardwareFamily,
    identifiers: &'static [(Field, &'static str)],
    /// Table that decodes the family's service toggles.
    pub service_state: &'static EnumTable,
}

impl Bundle {
    /// Wire identifier text for `field`, if the family defines it.
    pub fn identifier(&self, field: Field) -> Option<&'static str> {
        self.identifiers
            .iter()
            .chain(COMMON)
            .find(|(f, _)| *f == field)
            .map(|(_, oid)| *oid)
    }

    /// Resolve `field` to its wire identifier.
    ///
    /// A field the family does not define is [`Error::UnknownField`], which is
    /// distinct from a defined field the device then fails to return.
    pub fn resolve(&self, field: Field) -> Result<Oid> {
        let text = self.identifier(field).ok_or(Error::UnknownField {
            family: self.family,
            field,
        })?;
        Oid::parse(text)
    }

    /// Whether the family defines `field`.
    pub fn defines(&self, field: Field) -> bool {
        self.identifier(field).is_some()
    }

    /// Every field the family defines, family-specific fields first.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.identifiers.iter().chain(COMMON).map(|(f, _)| *f)
    }
}

/// B and C series.
pub static POINT_TO_POINT: Bundle = Bundle {
    family: HardwareFamily::PointToPoint,
    identifiers: &[
        (Field::WanSsid, ".1.3.6.1.4.1.43356.2.1.2.3.1.0"),
        (Field::WanStatus, ".1.3.6.1.4.1.43356.2.1.2.3.3.0"),
        (Field::WirelessMode, ".1.3.6.1.4.1.43356.2.1.2.4.1.0"),
        (Field::TdmaMode, ".1.3.6.1.4.1.43356.2.1.2.4.2.0"),
        (Field::TdmaWindow, ".1.3.6.1.4.1.43356.2.1.2.4.4.0"),
        (Field::TrafficSplit, ".1.3.6.1.4.1.43356.2.1.2.4.5.0"),
        (Field::NetworkMode, ".1.3.6.1.4.1.43356.2.1.2.5.1.0"),
        (Field::RecoverySsid, ".1.3.6.1.4.1.43356.2.1.2.5.2.0"),
        (Field::LocalSsid, ".1.3.6.1.4.1.43356.2.1.2.5.3.0"),
        (Field::LocalChannel, ".1.3.6.1.4.1.43356.2.1.2.5.4.0"),
        (Field::LocalIp, ".1.3.6.1.4.1.43356.2.1.2.5.8.0"),
        (Field::Netmask, ".1.3.6.1.4.1.43356.2.1.2.5.9.0"),
        (Field::PrimaryDnsServer, ".1.3.6.1.4.1.43356.2.1.2.5.12.0"),
        (Field::SecondaryDnsServer, ".1.3.6.1.4.1.43356.2.1.2.5.13.0"),
        (Field::HttpsStatus, ".1.3.6.1.4.1.43356.2.1.2.8.1.0"),
        (Field::MgmtVlanStatus, ".1.3.6.1.4.1.43356.2.1.2.8.2.0"),
        (Field::MgmtCloudStatus, ".1.3.6.1.4.1.43356.2.1.2.8.3.0"),
        (Field::SyslogStatus, ".1.3.6.1.4.1.43356.2.1.2.8.6.0"),
    ],
    service_state: &PTP_SERVICE_STATE,
};

/// A series.
pub static POINT_TO_MULTIPOINT: Bundle = Bundle {
    family: HardwareFamily::PointToMultipoint,
    identifiers: &[
        (Field::SsidTable, ".1.3.6.1.4.1.43356.2.1.2.9.1.1"),
        (Field::PtmpWirelessMode, ".1.3.6.1.4.1.43356.2.1.2.9.2.1.0"),
        (Field::AutoChannel, ".1.3.6.1.4.1.43356.2.1.2.9.3.1.0"),
        (Field::ChannelPowerTable, ".1.3.6.1.4.1.43356.2.1.2.9.3.3"),
        (Field::LocalIp, ".1.3.6.1.4.1.43356.2.1.2.9.7.1.0"),
        (Field::Netmask, ".1.3.6.1.4.1.43356.2.1.2.9.7.2.0"),
        (Field::PrimaryDnsServer, ".1.3.6.1.4.1.43356.2.1.2.9.7.5.0"),
        (Field::SecondaryDnsServer, ".1.3.6.1.4.1.43356.2.1.2.9.7.6.0"),
        (Field::MgmtVlanStatus, ".1.3.6.1.4.1.43356.2.1.2.9.7.7.0"),
        (Field::MgmtVlanPassthrough, ".1.3.6.1.4.1.43356.2.1.2.9.7.9.0"),
    ],
    service_state: &PTMP_SERVICE_STATE,
};

/// Resolve `field` for `family`.
pub fn resolve(family: HardwareFamily, field: Field) -> Result<Oid> {
    family.bundle().resolve(field)
}

/// Resolve a field by its logical name for `family`.
///
/// ```
/// use mimosa_snmp::HardwareFamily;
/// use mimosa_snmp::registry::resolve_name;
///
/// let oid = resolve_name(HardwareFamily::PointToMultipoint, "mimosa_local_ip").unwrap();
/// assert_eq!(oid.to_string(), "1.3.6.1.4.1.43356.2.1.2.9.7.1.0");
/// ```
pub fn resolve_name(family: HardwareFamily, name: &str) -> Result<Oid> {
    resolve(family, name.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_identifier_parses() {
        for family in HardwareFamily::ALL {
            for field in family.bundle().fields() {
                let oid = resolve(family, field).unwrap();
                assert!(oid.starts_with(&Oid::from_slice(&[1, 3, 6, 1])), "{field}");
            }
        }
    }

    #[test]
    fn test_family_specific_identifiers_differ() {
        let ptp = resolve(HardwareFamily::PointToPoint, Field::LocalIp).unwrap();
        let ptmp = resolve(HardwareFamily::PointToMultipoint, Field::LocalIp).unwrap();
        assert_ne!(ptp, ptmp);
        assert_eq!(ptmp.to_string(), "1.3.6.1.4.1.43356.2.1.2.9.7.1.0");
    }

    #[test]
    fn test_common_identifiers_shared() {
        for field in [Field::UnlockCode, Field::RegulatoryDomain, Field::SysObjectId] {
            assert_eq!(
                resolve(HardwareFamily::PointToPoint, field).unwrap(),
                resolve(HardwareFamily::PointToMultipoint, field).unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_field_is_distinct_error() {
        let err = resolve(HardwareFamily::PointToMultipoint, Field::HttpsStatus).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownField {
                family: HardwareFamily::PointToMultipoint,
                field: Field::HttpsStatus
            }
        ));
        assert!(!HardwareFamily::PointToPoint.bundle().defines(Field::SsidTable));
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), *field);
        }
        assert!("no_such_field".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_names_unique() {
        let mut names: Vec<_> = Field::ALL.iter().map(Field::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }
}
