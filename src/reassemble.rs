//! Table reassembly.
//!
//! Some vendor tables come back from a walk as one flat run of
//! `(index, value)` rows with nothing but arrival order to say which column
//! a value belongs to. [`reassemble`] folds such a run back into one
//! [`Record`] per index, using a declared [`RecordShape`] to name each
//! position.
//!
//! The first row seen for an index only registers the index and carries no
//! column value. Every later row for that index fills the next slot of the
//! shape, so a lost, duplicated or reordered row shifts every following
//! column of that record.
//!
//! ```
//! use mimosa_snmp::reassemble::{SSID_SHAPE, reassemble};
//! use mimosa_snmp::walk::WalkRow;
//!
//! let rows = [
//!     WalkRow::new(1, "1"),          // registers index 1
//!     WalkRow::new(1, "Office"),     // mimosaPtmpSsidName
//!     WalkRow::new(1, "1"),          // mimosaPtmpSsidType
//! ];
//! let table = reassemble(&rows, &SSID_SHAPE);
//! assert_eq!(table[&1].get("mimosaPtmpSsidName"), Some("Office"));
//! assert_eq!(table[&1].get("mimosaPtmpSsidType"), Some("cpe"));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::decode::decode_value;
use crate::enums::{EnumTable, PTMP_ON_OFF, PTMP_SSID_TYPE, PTMP_TRUE_FALSE};
use crate::walk::WalkRow;

/// One named position in a record.
#[derive(Debug)]
pub struct Slot {
    pub name: &'static str,
    /// Table applied to values in this position. Codes the table does not
    /// know are kept as they are.
    pub table: Option<&'static EnumTable>,
}

impl Slot {
    /// A slot whose value is kept as decoded.
    pub const fn raw(name: &'static str) -> Self {
        Self { name, table: None }
    }

    /// A slot whose value goes through `table`.
    pub const fn mapped(name: &'static str, table: &'static EnumTable) -> Self {
        Self {
            name,
            table: Some(table),
        }
    }

    fn render(&self, decoded: String) -> String {
        match self.table {
            Some(table) => table.lookup_or_raw(&decoded),
            None => decoded,
        }
    }
}

/// The ordered slots of one record.
#[derive(Debug)]
pub struct RecordShape {
    name: &'static str,
    slots: &'static [Slot],
}

impl RecordShape {
    pub const fn new(name: &'static str, slots: &'static [Slot]) -> Self {
        Self { name, slots }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Number of columns in a complete record.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Point-to-multipoint SSID table.
pub static SSID_SHAPE: RecordShape = RecordShape::new(
    "ssid",
    &[
        Slot::raw("mimosaPtmpSsidName"),
        Slot::mapped("mimosaPtmpSsidType", &PTMP_SSID_TYPE),
        Slot::mapped("mimosaPtmpSsidEnabled", &PTMP_TRUE_FALSE),
        Slot::mapped("mimosaPtmpSsidBroadcastEnabled", &PTMP_TRUE_FALSE),
        Slot::mapped("mimosaPtmpSsidIsolationEnabled", &PTMP_TRUE_FALSE),
    ],
);

/// Point-to-multipoint channel and power table.
pub static CHANNEL_POWER_SHAPE: RecordShape = RecordShape::new(
    "channel_power",
    &[
        Slot::raw("mimosaPtmpChPwrRadioName"),
        Slot::raw("mimosaPtmpChPwrCntrFreqCfg"),
        Slot::raw("mimosaPtmpChPwrPrimChannelCfg"),
        Slot::raw("mimosaPtmpChPwrChWidthCfg"),
        Slot::raw("mimosaPtmpChPwrTxPowerCfg"),
        Slot::raw("mimosaPtmpChPwrCntrFreqCur"),
        Slot::raw("mimosaPtmpChPwrPrimChannelCur"),
        Slot::raw("mimosaPtmpChPwrChWidthCur"),
        Slot::raw("mimosaPtmpChPwrTxPowerCur"),
        Slot::mapped("mimosaPtmpChPwrAgcMode", &PTMP_ON_OFF),
        Slot::raw("mimosaPtmpChPwrMinRxPower"),
    ],
);

/// A reassembled record: slot names and values in shape order.
///
/// Serializes as a map that keeps shape order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    /// Value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Slot names and values, in shape order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Fold walk rows into one record per index.
///
/// Rows are processed in the order given. A value the device did not return
/// becomes an empty string in its slot. Rows beyond the shape's length for
/// an index are dropped.
pub fn reassemble(rows: &[WalkRow], shape: &RecordShape) -> BTreeMap<u32, Record> {
    let mut records: BTreeMap<u32, Record> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in rows {
        let record = match records.entry(row.index) {
            Entry::Vacant(entry) => {
                entry.insert(Record::default());
                continue;
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        let Some(slot) = shape.slots.get(record.len()) else {
            tracing::debug!(target: "mimosa_snmp::reassemble", { snmp.shape = shape.name, snmp.index = row.index, snmp.value = %row.value }, "row beyond record shape dropped");
            dropped += 1;
            continue;
        };

        let decoded = decode_value(&row.value).unwrap_or_default();
        record.fields.push((slot.name, slot.render(decoded)));
    }

    tracing::trace!(target: "mimosa_snmp::reassemble", { snmp.shape = shape.name, snmp.rows = rows.len(), snmp.records = records.len(), dropped }, "table reassembled");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn ssid_rows(index: u32, name: &str, kind: &str, flags: [&str; 3]) -> Vec<WalkRow> {
        let mut rows = vec![WalkRow::new(index, index.to_string()), WalkRow::new(index, name)];
        rows.push(WalkRow::new(index, kind));
        rows.extend(flags.iter().map(|f| WalkRow::new(index, *f)));
        rows
    }

    #[test]
    fn test_ssid_shape_register_then_assign() {
        let mut rows = ssid_rows(1, "Office", "1", ["1", "2", "1"]);
        rows.extend(ssid_rows(2, "Guest", "0", ["2", "1", "2"]));
        let indices: Vec<u32> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2]);

        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table.len(), 2);

        let first: Vec<_> = table[&1].iter().collect();
        assert_eq!(
            first,
            [
                ("mimosaPtmpSsidName", "Office"),
                ("mimosaPtmpSsidType", "cpe"),
                ("mimosaPtmpSsidEnabled", "true"),
                ("mimosaPtmpSsidBroadcastEnabled", "false"),
                ("mimosaPtmpSsidIsolationEnabled", "true"),
            ]
        );
        assert_eq!(table[&2].get("mimosaPtmpSsidType"), Some("hotspot"));
        assert_eq!(table[&2].get("mimosaPtmpSsidEnabled"), Some("false"));
    }

    #[test]
    fn test_name_slot_never_enumerated() {
        // "1" would be "true" or "cpe" if the name slot went through a table
        let rows = [WalkRow::new(4, "x"), WalkRow::new(4, "1")];
        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table[&4].get("mimosaPtmpSsidName"), Some("1"));
    }

    #[test]
    fn test_unmapped_slot_code_passes_through() {
        let rows = [
            WalkRow::new(1, "1"),
            WalkRow::new(1, "Office"),
            WalkRow::new(1, "7"),
            WalkRow::new(1, "3"),
        ];
        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table[&1].get("mimosaPtmpSsidType"), Some("7"));
        assert_eq!(table[&1].get("mimosaPtmpSsidEnabled"), Some("3"));
    }

    #[test]
    fn test_interleaved_indices() {
        let rows = [
            WalkRow::new(1, "r1"),
            WalkRow::new(2, "r2"),
            WalkRow::new(1, "Office"),
            WalkRow::new(2, "Guest"),
        ];
        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table[&1].get("mimosaPtmpSsidName"), Some("Office"));
        assert_eq!(table[&2].get("mimosaPtmpSsidName"), Some("Guest"));
    }

    #[test]
    fn test_channel_power_agc_slot() {
        let mut rows = vec![WalkRow::new(1, "1"), WalkRow::new(1, "wifi0")];
        rows.extend((1..=8).map(|n| WalkRow::new(1, Value::Integer(5000 + n))));
        rows.push(WalkRow::new(1, Value::Integer(1)));
        rows.push(WalkRow::new(1, Value::Integer(-90)));

        let table = reassemble(&rows, &CHANNEL_POWER_SHAPE);
        let record = &table[&1];
        assert_eq!(record.len(), CHANNEL_POWER_SHAPE.len());
        assert_eq!(record.get("mimosaPtmpChPwrRadioName"), Some("wifi0"));
        assert_eq!(record.get("mimosaPtmpChPwrCntrFreqCfg"), Some("5001"));
        assert_eq!(record.get("mimosaPtmpChPwrAgcMode"), Some("on"));
        assert_eq!(record.get("mimosaPtmpChPwrMinRxPower"), Some("-90"));
    }

    #[test]
    fn test_overflow_rows_dropped() {
        let mut rows = ssid_rows(1, "Office", "1", ["1", "1", "1"]);
        rows.push(WalkRow::new(1, "extra"));
        rows.push(WalkRow::new(1, "extra"));
        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table[&1].len(), SSID_SHAPE.len());
        assert!(table[&1].iter().all(|(_, v)| v != "extra"));
    }

    #[test]
    fn test_register_only_index_is_empty_record() {
        let table = reassemble(&[WalkRow::new(9, "9")], &SSID_SHAPE);
        assert!(table[&9].is_empty());
    }

    #[test]
    fn test_unavailable_value_is_empty_string() {
        let rows = [WalkRow::new(1, "1"), WalkRow::new(1, Value::NoSuchInstance)];
        let table = reassemble(&rows, &SSID_SHAPE);
        assert_eq!(table[&1].get("mimosaPtmpSsidName"), Some(""));
    }

    #[test]
    fn test_empty_walk() {
        assert!(reassemble(&[], &CHANNEL_POWER_SHAPE).is_empty());
    }
}
