//! Currency reference data as shipped in `currency_data.json`.

use serde::{Deserialize, Serialize};

/// One ISO 4217 currency entry from the reference file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 alphabetic code, e.g. "USD".
    #[serde(rename = "code")]
    pub code: String,
    /// ISO 4217 numeric code, kept as a string to preserve leading zeros.
    #[serde(rename = "numeric")]
    pub numeric: String,
    /// Full currency name, e.g. "United States dollar".
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    /// Number of decimal places in minor units.
    #[serde(rename = "decimals", default)]
    pub decimals: i32,
    /// Display symbol, absent for some currencies.
    #[serde(rename = "symbol")]
    pub symbol: Option<String>,
}

impl Currency {
    /// The form shown in (and validated against) the currency selector,
    /// e.g. `"$ - USD"`. Falls back to the short name when the currency
    /// has no symbol.
    pub fn display_choice(&self) -> String {
        match &self.symbol {
            Some(symbol) => format!("{} - {}", symbol, self.code),
            None => format!("{} - {}", self.short_name, self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_entry() {
        let json = r#"{
            "code": "USD",
            "numeric": "840",
            "name": "United States dollar",
            "shortName": "dollar",
            "decimals": 2,
            "symbol": "$"
        }"#;
        let currency: Currency = serde_json::from_str(json).expect("parse currency");
        assert_eq!(currency.code, "USD");
        assert_eq!(currency.display_choice(), "$ - USD");
    }

    #[test]
    fn display_choice_without_symbol() {
        let currency = Currency {
            code: "CHE".to_string(),
            numeric: "947".to_string(),
            name: "WIR euro".to_string(),
            short_name: "euro".to_string(),
            decimals: 2,
            symbol: None,
        };
        assert_eq!(currency.display_choice(), "euro - CHE");
    }
}
