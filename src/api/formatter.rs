use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::core::{Precision, format_fixed, format_floor, format_plain};

pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Data description of a formatter callback.
///
/// Hosts that cannot receive Rust closures rebuild the callback from this
/// description; two formatters with equal specs produce identical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatterSpec {
    /// `floor(value)` as an integer.
    WholeHours,
    /// Fixed-point text, optionally followed by a space and a unit.
    FixedDecimals {
        precision: Precision,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// `value - offset` followed by ` hours`.
    IndexHours { offset: i32 },
}

impl FormatterSpec {
    fn compile(&self) -> ValueFormatterFn {
        match self {
            Self::WholeHours => Arc::new(format_floor),
            Self::FixedDecimals {
                precision,
                unit: None,
            } => {
                let precision = *precision;
                Arc::new(move |value: f64| format_fixed(value, precision))
            }
            Self::FixedDecimals {
                precision,
                unit: Some(unit),
            } => {
                let precision = *precision;
                let unit = unit.clone();
                Arc::new(move |value: f64| format!("{} {unit}", format_fixed(value, precision)))
            }
            Self::IndexHours { offset } => {
                let offset = f64::from(*offset);
                Arc::new(move |value: f64| format!("{} hours", format_plain(value - offset)))
            }
        }
    }
}

/// A pure `f64 -> String` formatter together with its description.
#[derive(Clone)]
pub struct LabelFormatter {
    spec: FormatterSpec,
    format_fn: ValueFormatterFn,
}

impl LabelFormatter {
    #[must_use]
    pub fn from_spec(spec: FormatterSpec) -> Self {
        let format_fn = spec.compile();
        Self { spec, format_fn }
    }

    #[must_use]
    pub fn whole_hours() -> Self {
        Self::from_spec(FormatterSpec::WholeHours)
    }

    #[must_use]
    pub fn fixed_decimals(precision: Precision) -> Self {
        Self::from_spec(FormatterSpec::FixedDecimals {
            precision,
            unit: None,
        })
    }

    #[must_use]
    pub fn fixed_decimals_with_unit(precision: Precision, unit: &str) -> Self {
        Self::from_spec(FormatterSpec::FixedDecimals {
            precision,
            unit: Some(unit.to_owned()),
        })
    }

    #[must_use]
    pub fn index_hours(offset: i32) -> Self {
        Self::from_spec(FormatterSpec::IndexHours { offset })
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.format_fn)(value)
    }

    #[must_use]
    pub fn spec(&self) -> &FormatterSpec {
        &self.spec
    }

    /// Shared callback handle for renderers that store closures.
    #[must_use]
    pub fn callback(&self) -> ValueFormatterFn {
        Arc::clone(&self.format_fn)
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LabelFormatter").field(&self.spec).finish()
    }
}

impl PartialEq for LabelFormatter {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

impl Eq for LabelFormatter {}

impl Serialize for LabelFormatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.spec.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LabelFormatter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FormatterSpec::deserialize(deserializer).map(Self::from_spec)
    }
}
