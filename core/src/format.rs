//! Display formatting helpers.

/// Binary-prefix units, base 1024. Sizes past GB are clamped to GB.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display.
///
/// Base-1024 scaling with at most two decimal places, trailing zeros
/// trimmed:
///
/// ```
/// use clauseease_core::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1024), "1 KB");
/// assert_eq!(format_file_size(1_572_864), "1.5 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // 1024 = 2^10, so ilog2 / 10 picks the unit
    let exp = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    let value = format!("{rounded:.2}");
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{value} {}", UNITS[exp])
}

/// Truncate text for display, appending `...` when it was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_len).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_values_trim_trailing_zeros() {
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1234), "1.21 KB");
    }

    #[test]
    fn just_under_a_unit_rounds_up_within_the_lower_unit() {
        // 1048575 / 1024 = 1023.999..., shown as 1024 KB rather than 1 MB
        assert_eq!(format_file_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn upload_limit_reads_cleanly() {
        assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
    }

    #[test]
    fn sizes_past_gigabytes_clamp_to_gb() {
        assert_eq!(format_file_size(1024u64.pow(4)), "1024 GB");
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_text("short.pdf", 20), "short.pdf");
        assert_eq!(
            truncate_text("a-very-long-contract-name.pdf", 10),
            "a-very-lon..."
        );
        // Boundary: exactly max_len is untouched
        assert_eq!(truncate_text("abcdef", 6), "abcdef");
    }
}
