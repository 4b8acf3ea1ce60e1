use serde::{Deserialize, Deserializer};

// the frontend may send page=abc or nothing at all; both fall back to page 1
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1))
}
