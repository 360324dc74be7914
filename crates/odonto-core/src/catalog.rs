//! Static condition catalogs.
//!
//! One row per catalog member, indexed by the enum discriminant. Rows hold
//! the short chart code drawn inside a tooth cell, the display labels and the
//! fill color. Degree colors darken with severity.

use crate::models::color::Rgb;
use crate::models::locale::Locale;

/// A single catalog row.
#[derive(Debug)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub label_pl: &'static str,
    pub label_en: &'static str,
    pub color: Rgb,
}

impl CatalogEntry {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Pl => self.label_pl,
            Locale::En => self.label_en,
        }
    }
}

/// Rows for [`BasicCondition`](crate::models::condition::BasicCondition), in
/// declaration order.
pub static BASIC: [CatalogEntry; 7] = [
    CatalogEntry {
        code: "o",
        label_pl: "Ząb niewyróżniony",
        label_en: "Unremarkable tooth",
        color: Rgb::from_hex(0xe8f5e8),
    },
    CatalogEntry {
        code: "-",
        label_pl: "Brak zęba",
        label_en: "Missing tooth",
        color: Rgb::from_hex(0xffebee),
    },
    CatalogEntry {
        code: "k",
        label_pl: "Korona protetyczna",
        label_en: "Prosthetic crown",
        color: Rgb::from_hex(0xfff3e0),
    },
    CatalogEntry {
        code: "~",
        label_pl: "Kamień lub osad nazębny",
        label_en: "Calculus or deposit",
        color: Rgb::from_hex(0xf3e5f5),
    },
    CatalogEntry {
        code: "c",
        label_pl: "Próchnica",
        label_en: "Caries",
        color: Rgb::from_hex(0xffcdd2),
    },
    CatalogEntry {
        code: "v",
        label_pl: "Ząb lub korzeń do usunięcia",
        label_en: "Tooth or root to extract",
        color: Rgb::from_hex(0xffcdd2),
    },
    CatalogEntry {
        code: "w",
        label_pl: "Wypełnienie",
        label_en: "Filling",
        color: Rgb::from_hex(0xc8e6c9),
    },
];

/// Rows for [`DegreeCondition`](crate::models::condition::DegreeCondition),
/// mildest first.
pub static DEGREE: [CatalogEntry; 5] = [
    CatalogEntry {
        code: "I",
        label_pl: "Stopień I",
        label_en: "Degree I",
        color: Rgb::from_hex(0xbbdefb),
    },
    CatalogEntry {
        code: "II",
        label_pl: "Stopień II",
        label_en: "Degree II",
        color: Rgb::from_hex(0x90caf9),
    },
    CatalogEntry {
        code: "III",
        label_pl: "Stopień III",
        label_en: "Degree III",
        color: Rgb::from_hex(0x64b5f6),
    },
    CatalogEntry {
        code: "IV",
        label_pl: "Stopień IV",
        label_en: "Degree IV",
        color: Rgb::from_hex(0x42a5f5),
    },
    CatalogEntry {
        code: "V",
        label_pl: "Stopień V",
        label_en: "Degree V",
        color: Rgb::from_hex(0x2196f3),
    },
];
