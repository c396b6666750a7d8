//! Normalized output views.
//!
//! Every view is a plain owned value built fresh per call. With the `serde`
//! feature the views serialize to the vendor-neutral document shape: the
//! field names here are the document keys.
//!
//! Wireless settings and services have a different key set per hardware
//! family, so they are enums with one variant per family that serialize
//! untagged.

use std::collections::BTreeMap;
use std::fmt;

use crate::reassemble::Record;

/// Which view an operation builds. Used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Facts,
    InterfaceList,
    Interfaces,
    InterfacesIp,
    WirelessSettings,
    DnsServers,
    Services,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Facts => "facts",
            View::InterfaceList => "interface list",
            View::Interfaces => "interfaces",
            View::InterfacesIp => "interfaces ip",
            View::WirelessSettings => "wireless settings",
            View::DnsServers => "DNS servers",
            View::Services => "services",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Facts {
    /// `sysUpTime` in its text form (hundredths of a second).
    pub uptime: String,
    pub vendor: String,
    pub os_version: String,
    pub serial_number: String,
    pub model: String,
    pub hostname: String,
    /// Same as `hostname`; the radios have no separate FQDN object.
    pub fqdn: String,
    pub interface_list: Vec<String>,
}

/// Value used for [`Interface::last_flapped`]: the radios do not report it.
pub const LAST_FLAPPED_UNKNOWN: f64 = -1.0;

/// One interface of the interface table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interface {
    pub is_up: bool,
    pub is_enabled: bool,
    pub description: String,
    pub last_flapped: f64,
    /// Megabits per second.
    pub speed: f64,
    pub mtu: i64,
    /// Colon-separated lowercase hex octets, empty when unavailable.
    pub mac_address: String,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            is_up: false,
            is_enabled: false,
            description: String::new(),
            last_flapped: LAST_FLAPPED_UNKNOWN,
            speed: 0.0,
            mtu: 0,
            mac_address: String::new(),
        }
    }
}

/// Interface table keyed by canonical interface name.
pub type Interfaces = BTreeMap<String, Interface>;

/// Interface name the addressing view reports under.
pub const PRIMARY_INTERFACE: &str = "br_local";

/// Prefix information for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prefix {
    pub prefix_length: u8,
}

/// Addresses of one interface, by address family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InterfaceAddresses {
    pub ipv4: BTreeMap<String, Prefix>,
}

/// Interface addressing keyed by interface name.
pub type InterfacesIp = BTreeMap<String, InterfaceAddresses>;

/// Reassembled vendor table keyed by entity index.
pub type Table = BTreeMap<u32, Record>;

/// Radio settings of a B or C series radio.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PtpWirelessSettings {
    pub unlock_code: String,
    pub regulatory_domain: String,
    pub wan_ssid: String,
    pub wan_status: String,
    pub wireless_mode: String,
    pub tdma_mode: String,
    pub tdma_window: String,
    pub traffic_split: String,
    pub network_mode: String,
    pub recovery_ssid: String,
    pub local_ssid: String,
    pub local_channel: String,
}

/// Radio settings of an A series access point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PtmpWirelessSettings {
    pub unlock_code: String,
    pub regulatory_domain: String,
    pub mimosa_wireless_mode: String,
    pub mimosa_auto_channel: String,
    pub ssid_table: Table,
    pub channel_power_table: Table,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum WirelessSettings {
    PointToPoint(PtpWirelessSettings),
    PointToMultipoint(PtmpWirelessSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DnsServers {
    pub primary_dns_server: String,
    pub secondary_dns_server: String,
}

/// Management service toggles of a B or C series radio.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PtpServices {
    pub https_status: String,
    pub mgmt_vlan_status: String,
    pub mgmt_cloud_status: String,
    pub syslog_status: String,
}

/// Management service toggles of an A series access point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PtmpServices {
    pub mgmt_vlan_status: String,
    pub mgmt_vlan_passthrough: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Services {
    PointToPoint(PtpServices),
    PointToMultipoint(PtmpServices),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_labels() {
        assert_eq!(View::InterfacesIp.to_string(), "interfaces ip");
        assert_eq!(View::DnsServers.to_string(), "DNS servers");
    }

    #[test]
    fn test_interface_default_has_flap_sentinel() {
        let intf = Interface::default();
        assert_eq!(intf.last_flapped, -1.0);
        assert_eq!(intf.mac_address, "");
        assert!(!intf.is_up);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_services_serialize_untagged() {
        let services = Services::PointToMultipoint(PtmpServices {
            mgmt_vlan_status: "enabled".into(),
            mgmt_vlan_passthrough: "disabled".into(),
        });
        assert_eq!(
            serde_json::to_value(&services).unwrap(),
            serde_json::json!({
                "mgmt_vlan_status": "enabled",
                "mgmt_vlan_passthrough": "disabled",
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_interfaces_ip_shape() {
        let mut addresses = InterfaceAddresses::default();
        addresses
            .ipv4
            .insert("10.0.0.5".into(), Prefix { prefix_length: 24 });
        let view: InterfacesIp = [(PRIMARY_INTERFACE.to_string(), addresses)].into();
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({"br_local": {"ipv4": {"10.0.0.5": {"prefix_length": 24}}}})
        );
    }
}
