//! The closed set of filterable dimensions.
//!
//! Facets are a fixed enum rather than a dynamically-keyed map: an unknown
//! facet name cannot exist past the parsing boundary. Query parameter keys
//! and product card attributes both use [`Facet::name`] as the wire name.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A named filter dimension of the product catalog.
///
/// The variant order is also the emission order for the query string and
/// the active-filter tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Application,
    Certifications,
    Impeller,
    Drive,
    Housing,
    Discharge,
}

impl Facet {
    /// All facets, in canonical order.
    pub const ALL: [Facet; 6] = [
        Facet::Application,
        Facet::Certifications,
        Facet::Impeller,
        Facet::Drive,
        Facet::Housing,
        Facet::Discharge,
    ];

    /// The wire name: query parameter key and `data-*` attribute suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Facet::Application => "application",
            Facet::Certifications => "certifications",
            Facet::Impeller => "impeller",
            Facet::Drive => "drive",
            Facet::Housing => "housing",
            Facet::Discharge => "discharge",
        }
    }

    /// Recognize a wire name. Returns `None` for anything outside the
    /// closed set.
    pub fn parse(name: &str) -> Option<Facet> {
        Facet::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Stable position of this facet in [`Facet::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human labels for the well-known filter values.
///
/// Single source of truth for tray tag labels. Values outside this table
/// are shown verbatim.
static DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("special-ventilation", "Special Ventilation"),
        ("restaurant", "Restaurant"),
        ("high-temp", "High Temp"),
        ("smoke-control", "Smoke Control"),
        ("amca-air-sound", "AMCA Air & Sound"),
        ("amca-feg-sound-air", "AMCA FEG Sound & Air"),
        ("amca-feg-air", "AMCA FEG Air"),
        ("ul-705", "UL/CUL 705"),
        ("ul-smoke-control", "UL Smoke Control"),
        ("ul-restaurant-exhaust", "UL/cUL Restaurant Exhaust"),
        ("high-wind", "High Wind"),
        ("miami-dade", "Miami Dade"),
        ("oshpd", "OSHPD"),
        ("centaxial-wheel", "CentAxial Wheel"),
        ("mixed-flow-wheel", "Mixed-Flow Wheel"),
        ("propeller", "Propeller"),
        ("belt-drive", "Belt Drive"),
        ("direct-drive", "Direct Drive"),
        ("spun-aluminum", "Spun Aluminum"),
        ("fab-h-hood", "Fab-H-Hood"),
        ("tubular", "Tubular"),
        ("downblast", "Downblast"),
        ("upblast", "Upblast"),
    ])
});

/// Display label for a filter value, falling back to the raw string.
pub fn display_name(value: &str) -> &str {
    DISPLAY_NAMES.get(value).copied().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_facet() {
        for facet in Facet::ALL {
            assert_eq!(Facet::parse(facet.name()), Some(facet));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Facet::parse("color"), None);
        assert_eq!(Facet::parse(""), None);
        assert_eq!(Facet::parse("Drive"), None); // case-sensitive
    }

    #[test]
    fn index_matches_all_order() {
        for (i, facet) in Facet::ALL.iter().enumerate() {
            assert_eq!(facet.index(), i);
        }
    }

    #[test]
    fn display_name_maps_known_values() {
        assert_eq!(display_name("belt-drive"), "Belt Drive");
        assert_eq!(display_name("amca-air-sound"), "AMCA Air & Sound");
        assert_eq!(display_name("oshpd"), "OSHPD");
    }

    #[test]
    fn display_name_falls_back_to_raw_value() {
        assert_eq!(display_name("bespoke-value"), "bespoke-value");
    }
}
