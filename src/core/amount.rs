use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A raw monetary value as it arrives from a form field or an API payload.
///
/// Values may be text, numeric, or missing entirely. Every shape converts
/// into `RawAmount` so the normalizer can accept whatever the caller holds.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::core::amount::RawAmount;
///
/// assert_eq!(RawAmount::from("Rp. 1.500"), RawAmount::Text("Rp. 1.500".into()));
/// assert_eq!(RawAmount::from(None::<&str>), RawAmount::Absent);
/// assert_eq!(RawAmount::from(2_700_000).to_text().as_deref(), Some("2700000"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawAmount {
    /// No value supplied (`null` in JSON).
    #[default]
    Absent,
    Text(String),
    Integer(i128),
    Float(f64),
    /// Exact decimal; only its integer part is rendered.
    Decimal(Decimal),
}

impl RawAmount {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawAmount::Absent)
    }

    /// Textual form fed to the sanitizer, or `None` when absent.
    ///
    /// Floats use their natural shortest decimal text, so `2700000.5`
    /// becomes `"2700000.5"` and goes through the same separator
    /// heuristic as user-typed text. Decimals are already unambiguous and
    /// render their truncated integer magnitude.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawAmount::Absent => None,
            RawAmount::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RawAmount::Integer(n) => Some(Cow::Owned(n.to_string())),
            RawAmount::Float(x) => Some(Cow::Owned(x.to_string())),
            RawAmount::Decimal(d) => Some(Cow::Owned(d.trunc().abs().normalize().to_string())),
        }
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Absent => Ok(()),
            RawAmount::Text(s) => write!(f, "{}", s),
            RawAmount::Integer(n) => write!(f, "{}", n),
            RawAmount::Float(x) => write!(f, "{}", x),
            RawAmount::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(s: String) -> Self {
        RawAmount::Text(s)
    }
}

impl From<&String> for RawAmount {
    fn from(s: &String) -> Self {
        RawAmount::Text(s.clone())
    }
}

impl From<&RawAmount> for RawAmount {
    fn from(raw: &RawAmount) -> Self {
        raw.clone()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawAmount {
                fn from(n: $t) -> Self {
                    RawAmount::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for RawAmount {
    fn from(n: usize) -> Self {
        RawAmount::Integer(n as i128)
    }
}

impl From<f64> for RawAmount {
    fn from(x: f64) -> Self {
        RawAmount::Float(x)
    }
}

impl From<f32> for RawAmount {
    fn from(x: f32) -> Self {
        RawAmount::Float(f64::from(x))
    }
}

impl From<Decimal> for RawAmount {
    fn from(d: Decimal) -> Self {
        RawAmount::Decimal(d)
    }
}

impl<T: Into<RawAmount>> From<Option<T>> for RawAmount {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawAmount::Absent, Into::into)
    }
}

impl From<&serde_json::Value> for RawAmount {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RawAmount::Absent,
            Value::String(s) => RawAmount::Text(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawAmount::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    RawAmount::Integer(i128::from(u))
                } else {
                    RawAmount::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            // Booleans, arrays and objects fall back to their JSON text.
            other => RawAmount::Text(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for RawAmount {
    fn from(value: serde_json::Value) -> Self {
        RawAmount::from(&value)
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawAmount::Absent => serializer.serialize_none(),
            RawAmount::Text(s) => serializer.serialize_str(s),
            RawAmount::Integer(n) => serializer.serialize_i128(*n),
            RawAmount::Float(x) => serializer.serialize_f64(*x),
            RawAmount::Decimal(d) => serializer.serialize_str(&d.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(RawAmount::from(value))
    }
}
