use serde::{Deserialize, Serialize};

const BYTE_UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Measurement unit of a profile; decides how values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Unit {
    Bytes,
    #[default]
    Count,
    Other(String),
}

impl Unit {
    pub fn parse(s: &str) -> Unit {
        match s {
            "bytes" => Unit::Bytes,
            "" | "count" | "samples" => Unit::Count,
            other => Unit::Other(other.to_string()),
        }
    }

    pub fn format(&self, value: i64) -> String {
        match self {
            Unit::Bytes => format_bytes(value),
            Unit::Count | Unit::Other(_) => value.to_string(),
        }
    }
}

/// Decimal (1000-based) byte formatting with two fixed decimals.
pub fn format_bytes(bytes: i64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let abs = bytes.unsigned_abs();
    let mut u = 0;
    let mut scale = 1u64;
    while u < BYTE_UNITS.len() - 1 && abs / scale >= 1000 {
        scale *= 1000;
        u += 1;
    }
    format!("{:.2} {}", bytes as f64 / scale as f64, BYTE_UNITS[u])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(999), "999.00 Bytes");
        assert_eq!(format_bytes(1000), "1.00 KB");
        assert_eq!(format_bytes(1_500_000), "1.50 MB");
        assert_eq!(format_bytes(-1500), "-1.50 KB");
        assert_eq!(format_bytes(i64::MAX), "9.22 EB");
    }

    #[test]
    fn unit_parsing_and_raw_values() {
        assert_eq!(Unit::parse("bytes"), Unit::Bytes);
        assert_eq!(Unit::parse(""), Unit::Count);
        assert_eq!(Unit::parse("nanoseconds"), Unit::Other("nanoseconds".into()));
        assert_eq!(Unit::parse("nanoseconds").format(1_500_000), "1500000");
        assert_eq!(Unit::Count.format(-3), "-3");
        assert_eq!(Unit::Bytes.format(2000), "2.00 KB");
    }
}
