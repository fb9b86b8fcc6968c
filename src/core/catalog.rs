use std::sync::LazyLock;

use serde::Serialize;

use super::FormulaDescriptor;

const PLASMA_TITLE: &str = "Plasma Concentration (mg/L)";

/// Navigation metadata attached to one catalog entry.
///
/// `key` is an opaque localization key; translation happens in the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaRoute {
    pub key: &'static str,
    pub path: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub descriptor: FormulaDescriptor,
    pub route: FormulaRoute,
}

static ENTRIES: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    vec![
        CatalogEntry {
            descriptor: FormulaDescriptor::new(
                "single-iv-dosing",
                PLASMA_TITLE,
                "mg/L",
                "single-iv-dosing",
            ),
            route: FormulaRoute {
                key: "route.formulas.singleIVDosing",
                path: "/formulas/single-iv-dosing",
                image: "assets/singleIVDosingImage.png",
            },
        },
        CatalogEntry {
            descriptor: FormulaDescriptor::new(
                "oral-dosing-plasma-time-curve",
                PLASMA_TITLE,
                "mg/L",
                "oral-dosing-plasma-time-curve",
            ),
            route: FormulaRoute {
                key: "route.formulas.oralDosingPlasmaTimeCurve",
                path: "/formulas/oralDosingPlasmaTimeCurve",
                image: "assets/oralDosingPlasmaTimeCurveImage.png",
            },
        },
        CatalogEntry {
            descriptor: FormulaDescriptor::new(
                "intravenous-infusion-and-effect-of-clearance",
                PLASMA_TITLE,
                "mg/L",
                "intravenous-infusion-and-effect-of-clearance",
            )
            .with_gradient_enabled(false),
            route: FormulaRoute {
                key: "route.formulas.intravenousInfusionAndEffectOfClearance",
                path: "/formulas/intravenousInfusionAndEffectOfClearance",
                image: "assets/intravenousInfusionAndEffectOfClearanceImage.png",
            },
        },
        CatalogEntry {
            descriptor: FormulaDescriptor::new(
                "non-linear-pharmacokinetics",
                "Concentration (mg/mL)",
                "mg/mL",
                "nonLinearPharmacokinetics",
            ),
            route: FormulaRoute {
                key: "route.formulas.nonLinearPharmacokinetics",
                path: "/formulas/nonLinearPharmacokinetics",
                image: "assets/nonLinearPharmacokineticsImage.png",
            },
        },
        CatalogEntry {
            descriptor: FormulaDescriptor::new(
                "multiple-oral-dosing",
                PLASMA_TITLE,
                "mg/L",
                "multipleOralDosing",
            )
            .with_time_range_length(176)
            .with_tick_interval(Some(25)),
            route: FormulaRoute {
                key: "route.formulas.multipleOralDosing",
                path: "/formulas/multipleOralDosing",
                image: "assets/multipleOralDosingImage.png",
            },
        },
    ]
});

/// Read-only table of the formulas the application offers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaCatalog;

impl FormulaCatalog {
    /// All entries in menu order. The sequence never changes during the
    /// process lifetime.
    #[must_use]
    pub fn list() -> &'static [CatalogEntry] {
        &ENTRIES
    }

    pub fn descriptors() -> impl Iterator<Item = &'static FormulaDescriptor> {
        ENTRIES.iter().map(|entry| &entry.descriptor)
    }

    #[must_use]
    pub fn find(id: &str) -> Option<&'static CatalogEntry> {
        ENTRIES.iter().find(|entry| entry.descriptor.id == id)
    }

    #[must_use]
    pub fn find_by_path(path: &str) -> Option<&'static CatalogEntry> {
        ENTRIES.iter().find(|entry| entry.route.path == path)
    }
}
