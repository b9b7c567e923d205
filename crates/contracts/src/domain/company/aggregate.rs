use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Numeric field wrapper
// ============================================================================

/// A numeric-like field as it appears in the raw dataset: usually a number,
/// sometimes a placeholder string ("n/a"), occasionally arbitrary junk.
///
/// Untagged: deserialization tries variants in order, so any JSON value that
/// is neither a number nor a string lands in `Other` instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Numeric {
    /// Numeric value of the field, if it has one.
    ///
    /// Strings are parsed ("2400" counts as a number, "n/a" does not).
    /// Non-finite values are treated as absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) if n.is_finite() => Some(*n),
            Numeric::Number(_) => None,
            Numeric::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Numeric::Other(_) => None,
        }
    }
}

// ============================================================================
// Company record
// ============================================================================

/// One company in the directory. Loaded once per session, never mutated;
/// filtering and sorting always produce new derived sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique across the record set; stable sort/render key.
    pub id: u32,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,

    /// Display-only; no effect on filtering or sorting.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,

    #[serde(default)]
    pub employees: Option<Numeric>,
    #[serde(default)]
    pub revenue: Option<Numeric>,
    #[serde(default)]
    pub founded: Option<Numeric>,
}

/// Missing/null -> "", wrong JSON type -> its JSON text. A malformed record
/// must degrade to a default, never abort the load.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}
