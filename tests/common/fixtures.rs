//! Realistic MIB data for one radio of each family.

use mimosa_snmp::{Oid, Value, oid};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

// =============================================================================
// Identifiers
// =============================================================================

const MIMOSA: [u32; 10] = [1, 3, 6, 1, 4, 1, 43356, 2, 1, 2];

/// Identifier under the Mimosa product tree (1.3.6.1.4.1.43356.2.1.2).
pub fn mimosa(arcs: &[u32]) -> Oid {
    Oid::new(MIMOSA.iter().chain(arcs).copied())
}

pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}

pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}

/// `ifTable` column `column`, row `index`.
pub fn if_entry(column: u32, index: u32) -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, column, index)
}

pub fn interfaces_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1)
}

pub fn ptmp_ssid_table() -> Oid {
    mimosa(&[9, 1, 1])
}

pub fn ptmp_channel_power_table() -> Oid {
    mimosa(&[9, 3, 3])
}

// =============================================================================
// Shared rows
// =============================================================================

pub struct InterfaceRow {
    pub index: u32,
    pub descr: &'static str,
    pub oper: i32,
    pub admin: i32,
    pub speed: u32,
    pub mtu: i32,
    pub mac: &'static [u8],
}

fn insert_interfaces(data: &mut BTreeMap<Oid, Value>, rows: &[InterfaceRow]) {
    for row in rows {
        data.insert(if_entry(1, row.index), Value::Integer(row.index as i32));
        data.insert(if_entry(2, row.index), Value::from(row.descr));
        data.insert(if_entry(4, row.index), Value::Integer(row.mtu));
        data.insert(if_entry(5, row.index), Value::Gauge32(row.speed));
        data.insert(if_entry(6, row.index), Value::from(row.mac));
        data.insert(if_entry(7, row.index), Value::Integer(row.admin));
        data.insert(if_entry(8, row.index), Value::Integer(row.oper));
    }
}

fn insert_device_info(data: &mut BTreeMap<Oid, Value>, name: &str, model: u32) {
    data.insert(
        sys_object_id(),
        Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 43356, 1, 1, model)),
    );
    data.insert(sys_uptime(), Value::TimeTicks(8_640_000));
    data.insert(mimosa(&[1, 1, 0]), Value::from(name));
    data.insert(mimosa(&[1, 2, 0]), Value::from("1023004567"));
    data.insert(mimosa(&[1, 3, 0]), Value::from("2.5.4.1"));
    data.insert(mimosa(&[1, 6, 0]), Value::from("X7K2-99QF"));
    data.insert(mimosa(&[1, 9, 0]), Value::from("US"));
}

fn ip(a: u8, b: u8, c: u8, d: u8) -> Value {
    Value::from(Ipv4Addr::new(a, b, c, d))
}

// =============================================================================
// Point-to-point (B5)
// =============================================================================

pub const PTP_INTERFACES: &[InterfaceRow] = &[
    InterfaceRow {
        index: 1,
        descr: "lo",
        oper: 1,
        admin: 1,
        speed: 0,
        mtu: 65536,
        mac: &[],
    },
    InterfaceRow {
        index: 2,
        descr: "eth1_emac1",
        oper: 1,
        admin: 1,
        speed: 1_000_000_000,
        mtu: 1500,
        mac: &[0x00, 0x15, 0x6d, 0x84, 0x10, 0x2a],
    },
    InterfaceRow {
        index: 3,
        descr: "eth1_emac2",
        oper: 2,
        admin: 2,
        speed: 0,
        mtu: 1500,
        mac: &[0x00, 0x15, 0x6d, 0x84, 0x10, 0x2b],
    },
    InterfaceRow {
        index: 4,
        descr: "wifi0",
        oper: 1,
        admin: 1,
        speed: 866_000_000,
        mtu: 2290,
        mac: &[0x00, 0x15, 0x6d, 0x84, 0x10, 0x2c],
    },
];

/// A B5 backhaul radio.
pub fn ptp_radio() -> BTreeMap<Oid, Value> {
    let mut data = BTreeMap::new();
    insert_device_info(&mut data, "B5-North", 1);
    insert_interfaces(&mut data, PTP_INTERFACES);

    data.insert(mimosa(&[3, 1, 0]), Value::from("backhaul-north"));
    data.insert(mimosa(&[3, 3, 0]), Value::Integer(1));
    data.insert(mimosa(&[4, 1, 0]), Value::Integer(2));
    data.insert(mimosa(&[4, 2, 0]), Value::Integer(1));
    data.insert(mimosa(&[4, 4, 0]), Value::Integer(8));
    data.insert(mimosa(&[4, 5, 0]), Value::Integer(9)); // not a traffic split code
    data.insert(mimosa(&[5, 1, 0]), Value::Integer(3));
    data.insert(mimosa(&[5, 2, 0]), Value::from("mimosa-recovery"));
    data.insert(mimosa(&[5, 3, 0]), Value::from("mimosa-local"));
    data.insert(mimosa(&[5, 4, 0]), Value::Integer(36));
    data.insert(mimosa(&[5, 8, 0]), ip(10, 0, 0, 5));
    data.insert(mimosa(&[5, 9, 0]), ip(255, 255, 255, 0));
    data.insert(mimosa(&[5, 12, 0]), ip(8, 8, 8, 8));
    data.insert(mimosa(&[5, 13, 0]), ip(1, 1, 1, 1));
    data.insert(mimosa(&[8, 1, 0]), Value::Integer(1));
    data.insert(mimosa(&[8, 2, 0]), Value::Integer(2));
    data.insert(mimosa(&[8, 3, 0]), Value::Integer(1));
    data.insert(mimosa(&[8, 6, 0]), Value::Integer(2));
    data
}

// =============================================================================
// Point-to-multipoint (A5)
// =============================================================================

pub const PTMP_INTERFACES: &[InterfaceRow] = &[
    InterfaceRow {
        index: 1,
        descr: "A5EthPort",
        oper: 1,
        admin: 1,
        speed: 1_000_000_000,
        mtu: 1500,
        mac: &[0x00, 0x15, 0x6d, 0x90, 0x00, 0x01],
    },
    InterfaceRow {
        index: 2,
        descr: "wlan0",
        oper: 1,
        admin: 1,
        speed: 0,
        mtu: 1500,
        mac: &[0x00, 0x15, 0x6d, 0x90, 0x00, 0x02],
    },
];

/// SSID entries: (index, name, type, enabled, broadcast, isolation).
pub const PTMP_SSIDS: &[(u32, &str, i32, i32, i32, i32)] = &[
    (1, "mimosa-cpe", 1, 1, 2, 2),
    (2, "mimosa-hotspot", 0, 2, 1, 1),
];

/// Channel/power entry for radio index 1, columns 2..=12 in table order.
pub fn channel_power_columns() -> Vec<Value> {
    vec![
        Value::from("wifi0"),
        Value::Integer(5220),
        Value::Integer(44),
        Value::Integer(80),
        Value::Integer(24),
        Value::Integer(5210),
        Value::Integer(40),
        Value::Integer(40),
        Value::Integer(22),
        Value::Integer(0),
        Value::Integer(-82),
    ]
}

/// An A5 access point.
pub fn ptmp_radio() -> BTreeMap<Oid, Value> {
    let mut data = BTreeMap::new();
    insert_device_info(&mut data, "A5-Sector-2", 3);
    insert_interfaces(&mut data, PTMP_INTERFACES);

    // The table walks column by column, so each index column comes first and
    // only registers its row.
    for &(index, name, kind, enabled, broadcast, isolation) in PTMP_SSIDS {
        let table = ptmp_ssid_table();
        data.insert(table.child(1).child(index), Value::Integer(index as i32));
        data.insert(table.child(2).child(index), Value::from(name));
        data.insert(table.child(3).child(index), Value::Integer(kind));
        data.insert(table.child(4).child(index), Value::Integer(enabled));
        data.insert(table.child(5).child(index), Value::Integer(broadcast));
        data.insert(table.child(6).child(index), Value::Integer(isolation));
    }

    let table = ptmp_channel_power_table();
    data.insert(table.child(1).child(1), Value::Integer(1));
    for (column, value) in (2..).zip(channel_power_columns()) {
        data.insert(table.child(column).child(1), value);
    }

    data.insert(mimosa(&[9, 2, 1, 0]), Value::Integer(2));
    data.insert(mimosa(&[9, 3, 1, 0]), Value::Integer(1));
    data.insert(mimosa(&[9, 7, 1, 0]), ip(192, 168, 1, 20));
    data.insert(mimosa(&[9, 7, 2, 0]), ip(255, 255, 255, 128));
    data.insert(mimosa(&[9, 7, 5, 0]), ip(192, 168, 1, 1));
    data.insert(mimosa(&[9, 7, 6, 0]), ip(9, 9, 9, 9));
    data.insert(mimosa(&[9, 7, 7, 0]), Value::Integer(0));
    data.insert(mimosa(&[9, 7, 9, 0]), Value::Integer(1));
    data
}
