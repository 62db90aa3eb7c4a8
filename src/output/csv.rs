//! CSV output formatting for subnet summaries.

use crate::models::SubnetSummary;
use itertools::Itertools;

const COLUMNS: [(&str, usize); 10] = [
    ("input", 26),
    ("cidr", 20),
    ("subnet_mask", 17),
    ("wildcard_mask", 17),
    ("broadcast", 17),
    ("first_usable", 17),
    ("last_usable", 17),
    ("prefix", 8),
    ("total", 12),
    ("usable", 12),
];

/// Format a value as a quoted, right-aligned field.
///
/// Embedded double quotes are doubled.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render subnet summaries as CSV, header first.
pub fn render_csv(summaries: &[SubnetSummary]) -> String {
    log::debug!("render_csv() rows={}", summaries.len());

    let header = COLUMNS
        .iter()
        .map(|(name, width)| format_field(name, *width))
        .join(",");

    let mut lines = vec![header];
    for s in summaries {
        let values = [
            s.input.clone(),
            s.cidr.clone(),
            s.subnet_mask.clone(),
            s.wildcard_mask.clone(),
            s.broadcast.clone(),
            s.first_usable.clone().unwrap_or_else(|| "none".to_string()),
            s.last_usable.clone().unwrap_or_else(|| "none".to_string()),
            s.prefix.to_string(),
            s.total_addresses.to_string(),
            s.usable_addresses.to_string(),
        ];
        lines.push(
            values
                .iter()
                .zip(COLUMNS.iter())
                .map(|(value, (_, width))| format_field(value, *width))
                .join(","),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_escapes_quotes() {
        assert_eq!(format_field("a\"b", 0), "\"a\"\"b\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_render_csv() {
        let subnet = Subnet::parse("172.16.5.130/26").unwrap();
        let out = render_csv(&[SubnetSummary::new("172.16.5.130/26", &subnet)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("\"input\""));

        let fields: Vec<&str> = lines[1].split(',').map(|f| f.trim()).collect();
        assert_eq!(
            fields,
            vec![
                "\"172.16.5.130/26\"",
                "\"172.16.5.128/26\"",
                "\"255.255.255.192\"",
                "\"0.0.0.63\"",
                "\"172.16.5.191\"",
                "\"172.16.5.129\"",
                "\"172.16.5.190\"",
                "\"26\"",
                "\"64\"",
                "\"62\"",
            ]
        );
    }

    #[test]
    fn test_render_csv_without_hosts() {
        let subnet = Subnet::parse("10.0.0.0/31").unwrap();
        let out = render_csv(&[SubnetSummary::new("10.0.0.0/31", &subnet)]);
        assert_eq!(out.matches("\"none\"").count(), 2);
    }
}
