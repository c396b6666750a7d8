//! Enumeration tables.
//!
//! Each table is a closed mapping from the small integer codes a radio
//! returns to the labels published in the normalized views. Tables are
//! plain static data; which table applies to which field is decided by the
//! family [`Bundle`](crate::registry::Bundle) and the record shapes in
//! [`reassemble`](crate::reassemble).

/// Label for a scalar code that is not in its table.
pub const UNKNOWN: &str = "unknown";

/// Model name for an unrecognized `sysObjectID`.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// A closed code-to-label table.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl EnumTable {
    /// Declare a table.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Table name, used in log fields.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Label for `code`, if the table has one.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Label for `code`, or [`UNKNOWN`] when the code is not in the table.
    ///
    /// ```
    /// use mimosa_snmp::enums::WAN_STATUS;
    ///
    /// assert_eq!(WAN_STATUS.lookup("1"), "connected");
    /// assert_eq!(WAN_STATUS.lookup("9"), "unknown");
    /// ```
    pub fn lookup(&self, code: &str) -> &'static str {
        self.get(code).unwrap_or_else(|| {
            tracing::debug!(target: "mimosa_snmp::enums", { snmp.table = self.name, snmp.code = code }, "code not in table");
            UNKNOWN
        })
    }

    /// Label for `code`, or `code` itself when the table has no entry.
    ///
    /// Used for table slots and interface names, where an unmapped value is
    /// still meaningful.
    pub fn lookup_or_raw(&self, code: &str) -> String {
        self.get(code).unwrap_or(code).to_owned()
    }
}

pub static WAN_STATUS: EnumTable =
    EnumTable::new("wan_status", &[("1", "connected"), ("2", "disconnected")]);

pub static WIRELESS_MODE: EnumTable =
    EnumTable::new("wireless_mode", &[("1", "accessPoint"), ("2", "station")]);

pub static TDMA_MODE: EnumTable = EnumTable::new("tdma_mode", &[("1", "a"), ("2", "b")]);

pub static TRAFFIC_SPLIT: EnumTable = EnumTable::new(
    "traffic_split",
    &[("1", "symmetric"), ("2", "asymmetric"), ("3", "auto")],
);

pub static NETWORK_MODE: EnumTable = EnumTable::new(
    "network_mode",
    &[("1", "enabled"), ("2", "disabled"), ("3", "auto")],
);

/// Service toggles on point-to-point firmware: 1 enabled, 2 disabled.
pub static PTP_SERVICE_STATE: EnumTable =
    EnumTable::new("ptp_service_state", &[("1", "enabled"), ("2", "disabled")]);

/// Service toggles on point-to-multipoint firmware: 1 enabled, 0 disabled.
pub static PTMP_SERVICE_STATE: EnumTable =
    EnumTable::new("ptmp_service_state", &[("1", "enabled"), ("0", "disabled")]);

pub static PTMP_TRUE_FALSE: EnumTable =
    EnumTable::new("ptmp_true_false", &[("1", "true"), ("2", "false")]);

pub static PTMP_WIRELESS_MODE: EnumTable =
    EnumTable::new("ptmp_wireless_mode", &[("1", "srs"), ("2", "wifiinterop")]);

pub static PTMP_SSID_TYPE: EnumTable =
    EnumTable::new("ptmp_ssid_type", &[("0", "hotspot"), ("1", "cpe")]);

pub static PTMP_ON_OFF: EnumTable = EnumTable::new("ptmp_on_off", &[("1", "on"), ("0", "off")]);

/// Vendor interface descriptions to canonical interface names.
///
/// Two descriptions may share a canonical name (`eth1_emac1` on the
/// point-to-point radios and `A5EthPort` on the A5 are both `Ethernet0`).
pub static INTERFACE_NAMES: EnumTable = EnumTable::new(
    "interface_names",
    &[
        ("eth1_emac1", "Ethernet0"),
        ("eth1_emac2", "Fiber_SFP"),
        ("wifi0", "Wireless0"),
        ("lo", "Loopback0"),
        ("tqe", "Tqe"),
        ("wlan0", "Wlan0"),
        ("br0", "Bridge0"),
        ("br_local", "BridgeLocal"),
        ("br_recovery", "BridgeRecovery"),
        ("br1", "Bridge1"),
        ("mon.wlan0", "MonitorWlan0"),
        ("wifi1", "Wireless1"),
        ("A5EthPort", "Ethernet0"),
    ],
);

/// `sysObjectID` values to model names.
static MODELS: EnumTable = EnumTable::new(
    "models",
    &[
        ("1.3.6.1.4.1.43356.1.1.1", "mimosaB5"),
        ("1.3.6.1.4.1.43356.1.1.2", "mimosaB5Lite"),
        ("1.3.6.1.4.1.43356.1.1.3", "mimosaA5"),
        ("1.3.6.1.4.1.43356.1.1.4", "mimosaC5"),
    ],
);

const ENTERPRISES_LABEL: &str = "SNMPv2-SMI::enterprises.";
const ENTERPRISES_NUMERIC: &str = "1.3.6.1.4.1.";

/// Canonical name for a vendor interface description.
///
/// ```
/// use mimosa_snmp::enums::canonical_interface_name;
///
/// assert_eq!(canonical_interface_name("eth1_emac1"), "Ethernet0");
/// assert_eq!(canonical_interface_name("eth9"), "eth9");
/// ```
pub fn canonical_interface_name(description: &str) -> String {
    INTERFACE_NAMES.lookup_or_raw(description)
}

/// Model name for a `sysObjectID`, in dotted or MIB-labelled form.
///
/// ```
/// use mimosa_snmp::enums::model_name;
///
/// assert_eq!(model_name("1.3.6.1.4.1.43356.1.1.3"), "mimosaA5");
/// assert_eq!(model_name("SNMPv2-SMI::enterprises.43356.1.1.1"), "mimosaB5");
/// assert_eq!(model_name("1.3.6.1.4.1.9.1.1"), "Unknown");
/// ```
pub fn model_name(object_id: &str) -> &'static str {
    let dotted = object_id.trim().trim_start_matches('.');
    let numeric = match dotted.strip_prefix(ENTERPRISES_LABEL) {
        Some(rest) => format!("{ENTERPRISES_NUMERIC}{rest}"),
        None => dotted.to_owned(),
    };
    MODELS.get(&numeric).unwrap_or(UNKNOWN_MODEL)
}
