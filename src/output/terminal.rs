//! Terminal output.

use crate::models::SubnetSummary;
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 11;

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render one block per subnet, labels left-aligned.
///
/// # Arguments
/// * `summaries` - The subnets to render
/// * `color` - Apply ANSI colours
pub fn render_table(summaries: &[SubnetSummary], color: bool) -> String {
    let mut out = String::new();
    for (i, s) in summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{input} => {cidr}\n",
            input = s.input,
            cidr = paint(&s.cidr, color, |t| t.green().bold())
        ));

        let rows = [
            ("Network", s.network.clone()),
            ("Mask", format!("{} (/{})", s.subnet_mask, s.prefix)),
            ("Wildcard", s.wildcard_mask.clone()),
            ("Broadcast", s.broadcast.clone()),
            ("Hosts", s.host_range()),
            (
                "Addresses",
                format!(
                    "{} total, {} usable",
                    s.total_addresses, s.usable_addresses
                ),
            ),
        ];
        for (label, value) in rows {
            let label = format!("{label:<LABEL_WIDTH$}");
            let value = if value == "none" {
                paint(&value, color, |t| t.yellow())
            } else {
                value
            };
            out.push_str(&format!(
                "  {label}{value}\n",
                label = paint(&label, color, |t| t.bold())
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    fn summary(text: &str) -> SubnetSummary {
        SubnetSummary::new(text, &Subnet::parse(text).unwrap())
    }

    #[test]
    fn test_render_table_plain() {
        let out = render_table(&[summary("10.0.0.5/30")], false);
        let expected = "10.0.0.5/30 => 10.0.0.4/30\n\
                        \x20 Network    10.0.0.4\n\
                        \x20 Mask       255.255.255.252 (/30)\n\
                        \x20 Wildcard   0.0.0.3\n\
                        \x20 Broadcast  10.0.0.7\n\
                        \x20 Hosts      10.0.0.5 - 10.0.0.6\n\
                        \x20 Addresses  4 total, 2 usable\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_table_separates_blocks() {
        let out = render_table(&[summary("10.0.0.0/8"), summary("10.0.0.1/32")], false);
        assert_eq!(out.matches(" => ").count(), 2);
        assert!(out.contains("\n\n10.0.0.1/32 => 10.0.0.1/32\n"));
        assert!(out.contains("  Hosts      none\n"));
    }

    #[test]
    fn test_render_table_color_keeps_values() {
        let out = render_table(&[summary("192.168.0.0/24")], true);
        assert!(out.contains("192.168.0.0/24"));
        assert!(out.contains("192.168.0.1 - 192.168.0.254"));
    }
}
