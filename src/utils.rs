// src/utils.rs
use std::path::Path;

/// Round a score for display. Ties go to the even neighbour, so 68.5 shows as 68.
pub fn round_score(score: f64) -> i64 {
    if !score.is_finite() {
        return 0;
    }
    score.round_ties_even() as i64
}

/// Format a number with `,` thousands separators (en-US grouping).
///
/// Fractions are kept to at most three digits, trailing zeros dropped.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let negative = value < 0.0;
    let scaled = (value.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction > 0 {
        let frac = format!("{:03}", fraction);
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if negative && (whole > 0 || fraction > 0) {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a byte count as kilobytes with two decimals, e.g. `2.00 KB`
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Get content type for an uploaded resume, falling back to a generic binary type
pub fn content_type_for(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(68.5), 68);
        assert_eq!(round_score(69.5), 70);
        assert_eq!(round_score(72.4), 72);
        assert_eq!(round_score(f64::NAN), 0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(80000.0), "80,000");
        assert_eq!(format_thousands(130000.0), "130,000");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.5), "1,234,567.5");
        assert_eq!(format_thousands(-4200.0), "-4,200");
        assert_eq!(format_thousands(0.0), "0");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(2048), "2.00 KB");
        assert_eq!(format_kilobytes(1536), "1.50 KB");
        assert_eq!(format_kilobytes(0), "0.00 KB");
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("test.pdf"), Some("pdf".to_string()));
        assert_eq!(
            get_file_extension("document.DOCX"),
            Some("docx".to_string())
        );
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("cv.PDF"), "application/pdf");
        assert_eq!(content_type_for("notes.txt"), "text/plain");
        assert_eq!(content_type_for("resume"), "application/octet-stream");
    }
}
