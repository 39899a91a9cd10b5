//! Human-readable byte and byte-rate formatting

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;
const TIB: u64 = 1024 * GIB;

/// Marker shown for a rate limit that is not set.
pub const UNLIMITED: &str = "∞";

/// Format a byte count using binary units (`1.50 MiB`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes < TIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else {
        format!("{:.2} TiB", bytes as f64 / TIB as f64)
    }
}

/// Format a byte rate. Negative rates mean "no limit" and render as `∞`.
pub fn format_byte_rate(bytes_per_second: i64) -> String {
    match u64::try_from(bytes_per_second) {
        Ok(rate) => format!("{}/s", format_bytes(rate)),
        Err(_) => UNLIMITED.to_string(),
    }
}

/// Clamp a signed daemon-reported quantity to a byte count.
pub fn clamp_bytes(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(600), "600 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(5 * MIB), "5.00 MiB");
        assert_eq!(format_bytes(3 * GIB), "3.00 GiB");
        assert_eq!(format_bytes(2 * TIB), "2.00 TiB");
    }

    #[test]
    fn test_format_byte_rate() {
        assert_eq!(format_byte_rate(-1024), UNLIMITED);
        assert_eq!(format_byte_rate(0), "0 B/s");
        assert_eq!(format_byte_rate(100 * 1024), "100.00 KiB/s");
    }

    #[test]
    fn test_clamp_bytes() {
        assert_eq!(clamp_bytes(-5), 0);
        assert_eq!(clamp_bytes(42), 42);
    }
}
