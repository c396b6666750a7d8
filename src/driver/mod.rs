//! Facts normalizer.
//!
//! [`Driver`] builds the normalized views of one radio. Each view operation
//! is independent: it resolves the identifiers it needs from the family
//! bundle, fetches them one round trip at a time, decodes and maps the
//! results, and returns either the complete view or one [`ViewError`].
//!
//! A value the radio does not return takes its type default and the view
//! still succeeds. Any failed round trip fails the whole view.

mod builder;

pub use builder::{DEFAULT_TIMEOUT, DriverBuilder, DriverConfig};

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use tracing::instrument;

use crate::decode::{decode_hardware_address, decode_value, is_status_one, prefix_length, to_float_mbps, to_int};
use crate::enums::{
    EnumTable, NETWORK_MODE, PTMP_TRUE_FALSE, PTMP_WIRELESS_MODE, TDMA_MODE, TRAFFIC_SPLIT,
    WAN_STATUS, WIRELESS_MODE, canonical_interface_name, model_name,
};
use crate::error::{Error, Result, ViewError, ViewResult};
use crate::family::HardwareFamily;
use crate::gateway::{Gateway, bounded};
use crate::oid::Oid;
use crate::reassemble::{CHANNEL_POWER_SHAPE, RecordShape, SSID_SHAPE, reassemble};
use crate::registry::{Bundle, Field};
use crate::value::Value;
use crate::varbind::VarBind;
use crate::view::{
    DnsServers, Facts, Interface, InterfaceAddresses, Interfaces, InterfacesIp,
    LAST_FLAPPED_UNKNOWN, PRIMARY_INTERFACE, Prefix, PtmpServices, PtmpWirelessSettings,
    PtpServices, PtpWirelessSettings, Services, Table, View, WirelessSettings,
};
use crate::walk::{Walk, WalkRow};

/// Value of the `vendor` fact.
pub const VENDOR: &str = "Mimosa";

/// `ifTable` columns merged into the interface table.
const INTERFACE_COLUMNS: [Field; 6] = [
    Field::IfDescr,
    Field::IfOperStatus,
    Field::IfAdminStatus,
    Field::IfSpeed,
    Field::IfMtu,
    Field::IfPhysAddress,
];

impl Driver<()> {
    /// Create a new driver builder.
    ///
    /// ```no_run
    /// # use mimosa_snmp::{Driver, Gateway};
    /// # async fn example(gateway: impl Gateway) -> mimosa_snmp::Result<()> {
    /// let driver = Driver::builder("10.0.0.5", "public")
    ///     .family("a_series")
    ///     .build(gateway)?;
    ///
    /// match driver.get_services().await {
    ///     Ok(services) => println!("{services:?}"),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(host: impl Into<String>, community: impl AsRef<[u8]>) -> DriverBuilder {
        DriverBuilder::new(host, community)
    }
}

/// Read-only driver for one Mimosa radio.
///
/// Holds only its configuration and the gateway. It keeps no state between
/// calls, so views may be requested in any order or concurrently.
pub struct Driver<G> {
    gateway: G,
    config: DriverConfig,
}

impl<G> Driver<G> {
    pub(crate) fn new(gateway: G, config: DriverConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn family(&self) -> HardwareFamily {
        self.config.family
    }

    /// Identifier and enumeration bundle of the configured family.
    pub fn bundle(&self) -> &'static Bundle {
        self.config.family.bundle()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// No-op: the protocol has no session to open.
    pub fn open(&self) -> Result<()> {
        tracing::trace!(target: "mimosa_snmp::driver", { snmp.target = %self.config.host }, "open");
        Ok(())
    }

    /// No-op: the protocol has no session to close.
    pub fn close(&self) -> Result<()> {
        tracing::trace!(target: "mimosa_snmp::driver", { snmp.target = %self.config.host }, "close");
        Ok(())
    }

    /// Always true; there is no connection that could have gone away.
    pub fn is_alive(&self) -> bool {
        true
    }
}

impl<G: Gateway> Driver<G> {
    async fn get(&self, oid: &Oid) -> Result<VarBind> {
        bounded(self.gateway.target(), self.config.timeout, self.gateway.get(oid)).await
    }

    /// Fetch one scalar field.
    ///
    /// `None` when the radio has no value, or when the family does not
    /// define the field at all.
    async fn fetch(&self, field: Field) -> Result<Option<Value>> {
        let oid = match self.bundle().resolve(field) {
            Ok(oid) => oid,
            Err(e @ Error::UnknownField { .. }) => {
                tracing::warn!(target: "mimosa_snmp::driver", { snmp.field = %field, error = %e }, "field not in registry, using default");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let vb = self.get(&oid).await?;
        if !vb.value.is_available() {
            tracing::debug!(target: "mimosa_snmp::driver", { snmp.field = %field, snmp.oid = %oid, snmp.value = %vb.value }, "value not available");
            return Ok(None);
        }
        Ok(Some(vb.value))
    }

    /// Fetch a field as text, or the empty string when it cannot be had.
    async fn text(&self, field: Field) -> Result<String> {
        let decoded = self.fetch(field).await?.as_ref().and_then(decode_value);
        Ok(decoded.unwrap_or_else(|| {
            tracing::debug!(target: "mimosa_snmp::driver", { snmp.field = %field }, "field unavailable, using default");
            String::new()
        }))
    }

    /// Fetch a code field and map it through `table`.
    async fn label(&self, field: Field, table: &EnumTable) -> Result<String> {
        Ok(table.lookup(&self.text(field).await?).to_owned())
    }

    /// Fetch a field a computed value depends on. Absence is an error.
    async fn required(&self, field: Field) -> Result<String> {
        let oid = self.bundle().resolve(field)?;
        let vb = self.get(&oid).await?;
        decode_value(&vb.value)
            .filter(|text| !text.is_empty())
            .ok_or(Error::FieldUnavailable { field, oid })
    }

    /// Walk one column or table.
    async fn column(&self, field: Field) -> Result<Vec<WalkRow>> {
        let oid = match self.bundle().resolve(field) {
            Ok(oid) => oid,
            Err(e @ Error::UnknownField { .. }) => {
                tracing::warn!(target: "mimosa_snmp::driver", { snmp.field = %field, error = %e }, "table not in registry, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let rows = Walk::new(&self.gateway, oid)
            .timeout(self.config.timeout)
            .max_results(self.config.max_walk_results)
            .rows()
            .await?;
        tracing::debug!(target: "mimosa_snmp::driver", { snmp.field = %field, snmp.rows = rows.len() }, "walked");
        Ok(rows)
    }

    async fn table(&self, field: Field, shape: &RecordShape) -> Result<Table> {
        Ok(reassemble(&self.column(field).await?, shape))
    }

    async fn facts(&self) -> Result<Facts> {
        let object_id = self.text(Field::SysObjectId).await?;
        let uptime = self.text(Field::SysUpTime).await?;
        let os_version = self.text(Field::FirmwareVersion).await?;
        let serial_number = self.text(Field::SerialNumber).await?;
        let hostname = self.text(Field::DeviceName).await?;
        let interface_list = self.interface_list().await?;

        Ok(Facts {
            uptime,
            vendor: VENDOR.to_owned(),
            os_version,
            serial_number,
            model: model_name(&object_id).to_owned(),
            fqdn: hostname.clone(),
            hostname,
            interface_list,
        })
    }

    async fn interface_list(&self) -> Result<Vec<String>> {
        Ok(self
            .column(Field::IfDescr)
            .await?
            .iter()
            .map(|row| canonical_interface_name(&decode_value(&row.value).unwrap_or_default()))
            .collect())
    }

    async fn interfaces(&self) -> Result<Interfaces> {
        let mut columns: BTreeMap<u32, BTreeMap<Field, Value>> = BTreeMap::new();
        for field in INTERFACE_COLUMNS {
            for row in self.column(field).await? {
                columns.entry(row.index).or_default().insert(field, row.value);
            }
        }

        let mut interfaces = Interfaces::new();
        for (index, values) in columns {
            let description = values
                .get(&Field::IfDescr)
                .and_then(decode_value)
                .unwrap_or_default();
            let interface = Interface {
                is_up: is_status_one(values.get(&Field::IfOperStatus)),
                is_enabled: is_status_one(values.get(&Field::IfAdminStatus)),
                last_flapped: LAST_FLAPPED_UNKNOWN,
                speed: to_float_mbps(values.get(&Field::IfSpeed), 0.0),
                mtu: to_int(values.get(&Field::IfMtu), 0),
                mac_address: values
                    .get(&Field::IfPhysAddress)
                    .map(decode_hardware_address)
                    .unwrap_or_default(),
                description,
            };

            let name = canonical_interface_name(&interface.description);
            if interfaces.insert(name, interface).is_some() {
                tracing::debug!(target: "mimosa_snmp::driver", { snmp.index = index }, "interface name repeated, keeping the later row");
            }
        }
        Ok(interfaces)
    }

    async fn interfaces_ip(&self) -> Result<InterfacesIp> {
        let ip = self.required(Field::LocalIp).await?;
        let netmask = self.required(Field::Netmask).await?;

        let address: Ipv4Addr = ip.parse().map_err(|_| Error::InvalidAddress {
            field: Field::LocalIp,
            value: ip.as_str().into(),
        })?;
        let prefix_length = netmask
            .parse::<Ipv4Addr>()
            .ok()
            .and_then(prefix_length)
            .or_else(|| netmask.parse::<u8>().ok().filter(|bits| *bits <= 32))
            .ok_or_else(|| Error::InvalidAddress {
                field: Field::Netmask,
                value: netmask.as_str().into(),
            })?;

        let mut addresses = InterfaceAddresses::default();
        addresses
            .ipv4
            .insert(address.to_string(), Prefix { prefix_length });
        Ok(InterfacesIp::from([(PRIMARY_INTERFACE.to_owned(), addresses)]))
    }

    async fn wireless_settings(&self) -> Result<WirelessSettings> {
        match self.config.family {
            HardwareFamily::PointToPoint => Ok(WirelessSettings::PointToPoint(PtpWirelessSettings {
                unlock_code: self.text(Field::UnlockCode).await?,
                regulatory_domain: self.text(Field::RegulatoryDomain).await?,
                wan_ssid: self.text(Field::WanSsid).await?,
                wan_status: self.label(Field::WanStatus, &WAN_STATUS).await?,
                wireless_mode: self.label(Field::WirelessMode, &WIRELESS_MODE).await?,
                tdma_mode: self.label(Field::TdmaMode, &TDMA_MODE).await?,
                tdma_window: self.text(Field::TdmaWindow).await?,
                traffic_split: self.label(Field::TrafficSplit, &TRAFFIC_SPLIT).await?,
                network_mode: self.label(Field::NetworkMode, &NETWORK_MODE).await?,
                recovery_ssid: self.text(Field::RecoverySsid).await?,
                local_ssid: self.text(Field::LocalSsid).await?,
                local_channel: self.text(Field::LocalChannel).await?,
            })),
            HardwareFamily::PointToMultipoint => {
                let ssid_table = self.table(Field::SsidTable, &SSID_SHAPE).await?;
                let channel_power_table = self
                    .table(Field::ChannelPowerTable, &CHANNEL_POWER_SHAPE)
                    .await?;
                Ok(WirelessSettings::PointToMultipoint(PtmpWirelessSettings {
                    unlock_code: self.text(Field::UnlockCode).await?,
                    regulatory_domain: self.text(Field::RegulatoryDomain).await?,
                    mimosa_wireless_mode: self
                        .label(Field::PtmpWirelessMode, &PTMP_WIRELESS_MODE)
                        .await?,
                    mimosa_auto_channel: self.label(Field::AutoChannel, &PTMP_TRUE_FALSE).await?,
                    ssid_table,
                    channel_power_table,
                }))
            }
        }
    }

    async fn dns_servers(&self) -> Result<DnsServers> {
        Ok(DnsServers {
            primary_dns_server: self.text(Field::PrimaryDnsServer).await?,
            secondary_dns_server: self.text(Field::SecondaryDnsServer).await?,
        })
    }

    async fn services(&self) -> Result<Services> {
        let state = self.bundle().service_state;
        match self.config.family {
            HardwareFamily::PointToPoint => Ok(Services::PointToPoint(PtpServices {
                https_status: self.label(Field::HttpsStatus, state).await?,
                mgmt_vlan_status: self.label(Field::MgmtVlanStatus, state).await?,
                mgmt_cloud_status: self.label(Field::MgmtCloudStatus, state).await?,
                syslog_status: self.label(Field::SyslogStatus, state).await?,
            })),
            HardwareFamily::PointToMultipoint => Ok(Services::PointToMultipoint(PtmpServices {
                mgmt_vlan_status: self.label(Field::MgmtVlanStatus, state).await?,
                mgmt_vlan_passthrough: self.label(Field::MgmtVlanPassthrough, state).await?,
            })),
        }
    }

    /// Device identity, including the interface name list.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_facts(&self) -> ViewResult<Facts> {
        self.facts().await.map_err(|e| ViewError::new(View::Facts, e))
    }

    /// Canonical interface names, in agent order.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_interfaces_list(&self) -> ViewResult<Vec<String>> {
        self.interface_list()
            .await
            .map_err(|e| ViewError::new(View::InterfaceList, e))
    }

    /// Interface table keyed by canonical interface name.
    ///
    /// When two interfaces map to the same canonical name the later one (by
    /// agent index) wins.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_interfaces(&self) -> ViewResult<Interfaces> {
        self.interfaces()
            .await
            .map_err(|e| ViewError::new(View::Interfaces, e))
    }

    /// Address and prefix of the local bridge.
    ///
    /// Only the primary address is reported, always under `br_local`.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_interfaces_ip(&self) -> ViewResult<InterfacesIp> {
        self.interfaces_ip()
            .await
            .map_err(|e| ViewError::new(View::InterfacesIp, e))
    }

    /// Radio settings; the key set depends on the family.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_wireless_settings(&self) -> ViewResult<WirelessSettings> {
        self.wireless_settings()
            .await
            .map_err(|e| ViewError::new(View::WirelessSettings, e))
    }

    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_dns_servers(&self) -> ViewResult<DnsServers> {
        self.dns_servers()
            .await
            .map_err(|e| ViewError::new(View::DnsServers, e))
    }

    /// Management service toggles; the key set depends on the family.
    #[instrument(skip(self), err(level = "warn"), fields(snmp.target = %self.config.host, snmp.family = %self.config.family))]
    pub async fn get_services(&self) -> ViewResult<Services> {
        self.services()
            .await
            .map_err(|e| ViewError::new(View::Services, e))
    }
}
