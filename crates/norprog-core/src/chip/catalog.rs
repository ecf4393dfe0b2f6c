//! Chip catalog and identification matching

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::table::BUILTIN_CHIPS;
use super::types::{ChipDescriptor, FAMILY_MASK};
use crate::spi::opcodes::RDID_LEN;

/// Identification bytes as read with RDID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawId {
    /// Manufacturer id (first byte)
    pub manufacturer: u8,
    /// Remaining four bytes, big-endian
    pub jedec: u32,
}

impl RawId {
    /// Assemble an id from the raw RDID response
    pub fn from_bytes(bytes: [u8; RDID_LEN]) -> Self {
        Self {
            manufacturer: bytes[0],
            jedec: u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]),
        }
    }

    /// Device family (upper half of the JEDEC id)
    pub fn family(&self) -> u32 {
        self.jedec & FAMILY_MASK
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:08X}", self.manufacturer, self.jedec)
    }
}

/// Outcome of matching a [`RawId`] against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatch<'a> {
    /// A row with the same manufacturer and full JEDEC id
    Exact(&'a ChipDescriptor),
    /// The first row with the same manufacturer and device family
    Family(&'a ChipDescriptor),
    /// Nothing matched
    NotFound {
        /// Same-manufacturer row with the fewest differing id bits, for
        /// diagnostics only
        closest: Option<&'a ChipDescriptor>,
    },
}

impl<'a> IdMatch<'a> {
    /// The matched chip, if identification succeeded
    pub fn chip(&self) -> Option<&'a ChipDescriptor> {
        match *self {
            Self::Exact(chip) | Self::Family(chip) => Some(chip),
            Self::NotFound { .. } => None,
        }
    }
}

/// Ordered collection of known chips
///
/// Order matters: when several rows share a device family, identification
/// picks the first one.
#[derive(Debug, Clone)]
pub struct Catalog {
    builtin: &'static [ChipDescriptor],
    #[cfg(feature = "alloc")]
    extra: Vec<ChipDescriptor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog of chips compiled into the crate
    pub fn builtin() -> Self {
        Self::from_static(BUILTIN_CHIPS)
    }

    /// A catalog over an arbitrary static table
    pub fn from_static(chips: &'static [ChipDescriptor]) -> Self {
        Self {
            builtin: chips,
            #[cfg(feature = "alloc")]
            extra: Vec::new(),
        }
    }

    /// Iterate over all chips in identification order
    pub fn iter(&self) -> impl Iterator<Item = &ChipDescriptor> + '_ {
        let builtin = self.builtin.iter();
        #[cfg(feature = "alloc")]
        let all = builtin.chain(self.extra.iter());
        #[cfg(not(feature = "alloc"))]
        let all = builtin;
        all
    }

    /// Number of chips
    pub fn len(&self) -> usize {
        #[cfg(feature = "alloc")]
        let extra = self.extra.len();
        #[cfg(not(feature = "alloc"))]
        let extra = 0;
        self.builtin.len() + extra
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Chip names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|chip| chip.name)
    }

    /// Find a chip by name (case-insensitive exact match)
    pub fn find_by_name(&self, name: &str) -> Option<&ChipDescriptor> {
        self.iter().find(|chip| chip.name.eq_ignore_ascii_case(name))
    }

    /// Find the chip with exactly this manufacturer and JEDEC id
    pub fn find_by_id(&self, manufacturer: u8, jedec: u32) -> Option<&ChipDescriptor> {
        self.iter()
            .find(|chip| chip.manufacturer_id == manufacturer && chip.jedec_id == jedec)
    }

    /// Append a chip after all existing rows
    ///
    /// Returns false, leaving the catalog unchanged, if a row with the same
    /// manufacturer and JEDEC id already exists.
    #[cfg(feature = "alloc")]
    pub fn add(&mut self, chip: ChipDescriptor) -> bool {
        if self.find_by_id(chip.manufacturer_id, chip.jedec_id).is_some() {
            return false;
        }
        self.extra.push(chip);
        true
    }

    /// Match identification bytes against the catalog
    ///
    /// Only rows of the same manufacturer are considered. A full JEDEC id
    /// match wins; otherwise the first row of the same device family in
    /// catalog order is returned.
    ///
    /// An exact match anywhere in the table beats a family row that comes
    /// earlier. Stopping at the first row of the family would hide later
    /// exact rows: FL016AIF (`0x02140000`) precedes S25FL016P
    /// (`0x02144D00`) and both belong to family `0x0214`, so a part that
    /// reports `0x02144D00` would otherwise be named FL016AIF and the
    /// S25FL016P row could never match.
    pub fn identify(&self, id: &RawId) -> IdMatch<'_> {
        let mut family = None;
        let mut closest: Option<(u32, &ChipDescriptor)> = None;

        for chip in self.iter().filter(|c| c.manufacturer_id == id.manufacturer) {
            if chip.jedec_id == id.jedec {
                return IdMatch::Exact(chip);
            }
            if family.is_none() && chip.family() == id.family() {
                family = Some(chip);
            }
            let weight = chip.jedec_id ^ id.jedec;
            if closest.is_none_or(|(best, _)| weight < best) {
                closest = Some((weight, chip));
            }
        }

        match family {
            Some(chip) => IdMatch::Family(chip),
            None => IdMatch::NotFound {
                closest: closest.map(|(_, chip)| chip),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::PAGE_SIZE;
    use std::vec::Vec;

    #[test]
    fn test_builtin_has_no_duplicate_ids() {
        let catalog = Catalog::builtin();
        let chips: Vec<_> = catalog.iter().collect();
        for (i, a) in chips.iter().enumerate() {
            for b in &chips[i + 1..] {
                assert!(
                    !(a.manufacturer_id == b.manufacturer_id && a.jedec_id == b.jedec_id),
                    "{} and {} share an id",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_builtin_geometry() {
        for chip in Catalog::builtin().iter() {
            assert!(chip.sector_count > 0, "{}", chip.name);
            assert_eq!(chip.sector_size % PAGE_SIZE, 0, "{}", chip.name);
            assert_eq!(
                chip.total_size() as u64,
                chip.sector_size as u64 * chip.sector_count as u64
            );
            // 3-byte addresses reach exactly 16 MiB
            assert_eq!(
                chip.four_byte_addr,
                chip.total_size() > 16 * 1024 * 1024,
                "{}",
                chip.name
            );
            assert!(chip.vcc_min_mv < chip.vcc_max_mv, "{}", chip.name);
        }
    }

    #[test]
    fn test_every_row_identifies_as_itself() {
        let catalog = Catalog::builtin();
        for chip in catalog.iter() {
            let id = RawId::from_bytes(chip.rdid_bytes());
            assert_eq!(catalog.identify(&id), IdMatch::Exact(chip), "{}", chip.name);
        }
    }

    #[test]
    fn test_identify_w25q128() {
        let catalog = Catalog::builtin();
        let id = RawId::from_bytes([0xEF, 0x40, 0x18, 0x00, 0x00]);
        let chip = catalog.identify(&id).chip().unwrap();
        assert_eq!(chip.name, "W25Q128BV");
        assert_eq!(chip.sector_size, 65536);
        assert_eq!(chip.sector_count, 256);
        assert!(!chip.four_byte_addr);
    }

    #[test]
    fn test_identify_family_match() {
        let catalog = Catalog::builtin();
        // W25Q128 variants differ only in the low bytes
        let id = RawId::from_bytes([0xEF, 0x40, 0x18, 0x12, 0x34]);
        match catalog.identify(&id) {
            IdMatch::Family(chip) => assert_eq!(chip.name, "W25Q128BV"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_exact_match_beats_earlier_family_match() {
        let catalog = Catalog::builtin();
        // FL016AIF (0x02140000) precedes S25FL016P in the same family
        let id = RawId::from_bytes([0x01, 0x02, 0x14, 0x4D, 0x00]);
        assert_eq!(catalog.identify(&id).chip().unwrap().name, "S25FL016P");

        let id = RawId::from_bytes([0x01, 0x02, 0x14, 0x99, 0x99]);
        assert_eq!(catalog.identify(&id).chip().unwrap().name, "FL016AIF");
    }

    #[test]
    fn test_identify_unknown_manufacturer() {
        let catalog = Catalog::builtin();
        let id = RawId::from_bytes([0x42, 0x40, 0x18, 0x00, 0x00]);
        assert_eq!(catalog.identify(&id), IdMatch::NotFound { closest: None });
    }

    #[test]
    fn test_identify_reports_closest_without_matching() {
        let catalog = Catalog::builtin();
        // Winbond id with a family nobody has
        let id = RawId::from_bytes([0xEF, 0x40, 0x1F, 0x00, 0x00]);
        match catalog.identify(&id) {
            IdMatch::NotFound {
                closest: Some(chip),
            } => {
                // 0x40190000 differs from 0x401F0000 in the fewest bits
                assert_eq!(chip.name, "W25Q256FV");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_names_in_catalog_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(names[0], "FL016AIF");
        assert_eq!(*names.last().unwrap(), "FM25M64A");
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("w25q256fv").unwrap();
        assert_eq!(chip.jedec_id, 0x4019_0000);
        assert!(catalog.find_by_name("W25Q").is_none());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::builtin();
        let before = catalog.len();
        let mut chip = *catalog.find_by_name("W25Q128BV").unwrap();
        chip.name = "W25Q128JV";
        assert!(!catalog.add(chip));

        chip.jedec_id = 0x4018_0001;
        assert!(catalog.add(chip));
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.names().last(), Some("W25Q128JV"));
    }
}
