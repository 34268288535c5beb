//! Label template taxonomy.

use serde::{Deserialize, Serialize};

/// The four label template families the service can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    /// Basic product label with barcode and product info.
    Standard,
    /// Products with color temperature selection (3000K/4000K/5700K).
    CctSelectable,
    /// Products with selectable power/wattage options.
    PowerSelectable,
    /// Emergency lighting products with battery backup.
    Emergency,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Standard => "standard",
            TemplateType::CctSelectable => "cct_selectable",
            TemplateType::PowerSelectable => "power_selectable",
            TemplateType::Emergency => "emergency",
        }
    }
}

impl std::str::FromStr for TemplateType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(TemplateType::Standard),
            "cct_selectable" => Ok(TemplateType::CctSelectable),
            "power_selectable" => Ok(TemplateType::PowerSelectable),
            "emergency" => Ok(TemplateType::Emergency),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_wire_format() {
        let json = serde_json::to_string(&TemplateType::CctSelectable).unwrap();
        assert_eq!(json, r#""cct_selectable""#);

        let parsed: TemplateType = serde_json::from_str(r#""power_selectable""#).unwrap();
        assert_eq!(parsed, TemplateType::PowerSelectable);
    }

    #[test]
    fn test_from_str_round_trip() {
        for t in [
            TemplateType::Standard,
            TemplateType::CctSelectable,
            TemplateType::PowerSelectable,
            TemplateType::Emergency,
        ] {
            assert_eq!(t.as_str().parse::<TemplateType>(), Ok(t));
        }
        assert!("grid".parse::<TemplateType>().is_err());
    }
}
