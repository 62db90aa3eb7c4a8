//! JSON output.

use crate::models::SubnetSummary;

/// Pretty printed JSON array of summaries.
pub fn render_json(summaries: &[SubnetSummary]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(summaries)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    #[test]
    fn test_render_json_round_trip() {
        let subnet = Subnet::parse("192.168.0.0/24").unwrap();
        let summaries = vec![SubnetSummary::new("192.168.0.0/24", &subnet)];
        let json = render_json(&summaries).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["cidr"], "192.168.0.0/24");
        assert_eq!(value[0]["total_addresses"], 256);
        assert_eq!(value[0]["first_usable"], "192.168.0.1");

        let back: Vec<SubnetSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summaries);
    }

    #[test]
    fn test_render_json_null_hosts() {
        let subnet = Subnet::parse("10.0.0.1/32").unwrap();
        let json = render_json(&[SubnetSummary::new("10.0.0.1/32", &subnet)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["last_usable"].is_null());
    }
}
