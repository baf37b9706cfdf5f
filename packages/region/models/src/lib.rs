#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Namibian administrative region catalog.
//!
//! Defines the canonical set of Namibia's 14 first-level administrative
//! divisions with their stable codes, reference population and area
//! figures, and the alternate spellings that external data sources use
//! for them. The catalog is compiled in, fixed in order, and never
//! mutated at runtime.

use serde::Serialize;

/// One of Namibia's 14 first-level administrative divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Two-letter stable identifier (ISO 3166-2:NA suffix, e.g. "KH").
    pub code: &'static str,
    /// Canonical display name (may contain non-ASCII glyphs, e.g. "ǁKaras").
    pub name: &'static str,
    /// Alternate spellings, historical names, and capital cities that
    /// external data uses to refer to this region. Curated so that no
    /// alias collides with another region's name, code, or aliases.
    pub aliases: &'static [&'static str],
    /// Population from the 2023 census.
    pub population: u32,
    /// Land area in square kilometres.
    pub area_km2: u32,
}

/// The full region catalog, in fixed registry order.
///
/// Alias-matching ties are resolved by this order, so the order is part
/// of the contract and must not be reshuffled.
pub const REGIONS: &[Region] = &[
    Region {
        code: "ER",
        name: "Erongo",
        aliases: &["Swakopmund", "Walvis Bay"],
        population: 240_206,
        area_km2: 63_579,
    },
    Region {
        code: "HA",
        name: "Hardap",
        aliases: &["Mariental", "Rehoboth"],
        population: 106_680,
        area_km2: 109_651,
    },
    Region {
        code: "KA",
        name: "ǁKaras",
        aliases: &["Karas", "//Karas", "Keetmanshoop", "Lüderitz", "Luderitz"],
        population: 109_893,
        area_km2: 161_215,
    },
    Region {
        code: "KE",
        name: "Kavango East",
        aliases: &["Rundu", "Kavango", "Okavango East"],
        population: 218_421,
        area_km2: 48_742,
    },
    Region {
        code: "KW",
        name: "Kavango West",
        aliases: &["Nkurenkuru", "Okavango West"],
        population: 123_266,
        area_km2: 24_591,
    },
    Region {
        code: "KH",
        name: "Khomas",
        aliases: &["Windhoek"],
        population: 494_605,
        area_km2: 37_007,
    },
    Region {
        code: "KU",
        name: "Kunene",
        aliases: &["Opuwo", "Kaokoland"],
        population: 120_762,
        area_km2: 115_293,
    },
    Region {
        code: "OW",
        name: "Ohangwena",
        aliases: &["Eenhana"],
        population: 337_729,
        area_km2: 10_703,
    },
    Region {
        code: "OH",
        name: "Omaheke",
        aliases: &["Gobabis"],
        population: 102_881,
        area_km2: 84_612,
    },
    Region {
        code: "OS",
        name: "Omusati",
        aliases: &["Outapi"],
        population: 316_671,
        area_km2: 26_573,
    },
    Region {
        code: "ON",
        name: "Oshana",
        aliases: &["Oshakati", "Ondangwa"],
        population: 230_801,
        area_km2: 8_653,
    },
    Region {
        code: "OT",
        name: "Oshikoto",
        aliases: &["Omuthiya", "Tsumeb"],
        population: 257_302,
        area_km2: 38_653,
    },
    Region {
        code: "OD",
        name: "Otjozondjupa",
        aliases: &["Otjiwarongo", "Grootfontein"],
        population: 220_811,
        area_km2: 105_185,
    },
    Region {
        code: "CA",
        name: "Zambezi",
        aliases: &["Caprivi", "Katima Mulilo"],
        population: 142_373,
        area_km2: 14_785,
    },
];

/// Number of regions in the catalog.
pub const REGION_COUNT: usize = 14;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fourteen_regions() {
        assert_eq!(REGIONS.len(), REGION_COUNT);
    }

    #[test]
    fn codes_are_two_ascii_letters() {
        for region in REGIONS {
            assert_eq!(region.code.len(), 2, "bad code for {}", region.name);
            assert!(
                region.code.chars().all(|c| c.is_ascii_uppercase()),
                "non-uppercase code for {}",
                region.name
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = REGIONS.iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), REGIONS.len());
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = REGIONS.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), REGIONS.len());
    }

    #[test]
    fn reference_facts_are_positive() {
        for region in REGIONS {
            assert!(region.population > 0, "no population for {}", region.name);
            assert!(region.area_km2 > 0, "no area for {}", region.name);
        }
    }
}
