/// Protocol catalog: the closed enumeration the scan walks.
///
/// The scan never hardcodes a protocol list or its bound. It asks a
/// [`ProtocolCatalog`] how many ids exist, what each one is called, and
/// whether a probe can be built for it. [`KnownProtocols`] is the built-in
/// catalog backed by [`defaults::PROTOCOLS`](crate::defaults::PROTOCOLS).
use crate::defaults::PROTOCOLS;

/// Protocol identifier. Valid ids run from 1 to `count()` inclusive.
pub type ProtocolId = u16;

/// Display name returned for ids outside the catalog
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Read-only view of an ordered protocol enumeration.
pub trait ProtocolCatalog {
    /// Number of protocol ids. Ids are `1..=count()`.
    fn count(&self) -> ProtocolId;

    /// Human-readable name for `id`.
    fn name_of(&self, id: ProtocolId) -> &str;

    /// Whether a probe can be transmitted under `id`.
    fn is_supported(&self, id: ProtocolId) -> bool;
}

/// Catalog of every protocol in the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownProtocols;

impl KnownProtocols {
    pub const fn new() -> Self {
        Self
    }

    fn entry(id: ProtocolId) -> Option<&'static (&'static str, bool)> {
        if id == 0 {
            return None;
        }
        PROTOCOLS.get(id as usize - 1)
    }

    /// Case-insensitive reverse lookup of a protocol name.
    #[cfg(test)]
    pub fn lookup(&self, name: &str) -> Option<ProtocolId> {
        PROTOCOLS
            .iter()
            .position(|&(n, _)| n.eq_ignore_ascii_case(name))
            .map(|i| (i + 1) as ProtocolId)
    }
}

impl ProtocolCatalog for KnownProtocols {
    fn count(&self) -> ProtocolId {
        PROTOCOLS.len() as ProtocolId
    }

    fn name_of(&self, id: ProtocolId) -> &str {
        Self::entry(id).map_or(UNKNOWN_NAME, |&(name, _)| name)
    }

    fn is_supported(&self, id: ProtocolId) -> bool {
        Self::entry(id).is_some_and(|&(_, ac)| ac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::ac_protocol_count;

    #[test]
    fn count_matches_table() {
        assert_eq!(KnownProtocols.count() as usize, PROTOCOLS.len());
    }

    #[test]
    fn ids_are_one_based() {
        let catalog = KnownProtocols::new();
        assert_eq!(catalog.name_of(1), "RC5");
        assert_eq!(catalog.name_of(15), "COOLIX");
        assert_eq!(catalog.name_of(catalog.count()), "EUROM");
    }

    #[test]
    fn out_of_range_ids_are_unknown_and_unsupported() {
        let catalog = KnownProtocols::new();
        assert_eq!(catalog.name_of(0), UNKNOWN_NAME);
        assert!(!catalog.is_supported(0));
        let past_end = catalog.count() + 1;
        assert_eq!(catalog.name_of(past_end), UNKNOWN_NAME);
        assert!(!catalog.is_supported(past_end));
    }

    #[test]
    fn ac_protocols_are_supported() {
        let catalog = KnownProtocols::new();
        for name in ["COOLIX", "DAIKIN", "GREE", "MITSUBISHI_AC", "TOSHIBA_AC"] {
            let id = catalog.lookup(name).unwrap();
            assert!(catalog.is_supported(id), "{name} should be supported");
        }
    }

    #[test]
    fn remote_button_protocols_are_skipped() {
        let catalog = KnownProtocols::new();
        for name in ["RC5", "NEC", "SONY", "PRONTO", "RAW"] {
            let id = catalog.lookup(name).unwrap();
            assert!(!catalog.is_supported(id), "{name} should not be supported");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = KnownProtocols::new();
        assert_eq!(catalog.lookup("coolix"), Some(15));
        assert_eq!(catalog.lookup("Daikin"), Some(16));
        assert_eq!(catalog.lookup("NOT_A_PROTOCOL"), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, &(a, _)) in PROTOCOLS.iter().enumerate() {
            for &(b, _) in &PROTOCOLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn names_fit_one_ble_notification() {
        for &(name, _) in PROTOCOLS {
            assert!(name.len() <= crate::comm::BLE_MAX_NOTIFY, "{name} too long");
        }
    }

    #[test]
    fn supported_count_matches_flag_count() {
        let catalog = KnownProtocols::new();
        let supported = (1..=catalog.count())
            .filter(|&id| catalog.is_supported(id))
            .count();
        assert_eq!(supported, ac_protocol_count());
        assert!(supported > 0);
    }
}
