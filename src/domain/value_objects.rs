//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Country a client address can be classified into.
///
/// The set is closed: localization tables match over it exhaustively,
/// so adding a variant forces every table to decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Russia,
    Germany,
    Usa,
    Brazil,
}

impl Country {
    /// All known countries, in declaration order.
    pub const ALL: [Country; 4] = [
        Country::Russia,
        Country::Germany,
        Country::Usa,
        Country::Brazil,
    ];

    /// Parse an ISO 3166-1 alpha-2 code.
    ///
    /// # Examples
    /// ```
    /// use geo_greeter::Country;
    ///
    /// assert_eq!(Country::from_code("ru"), Some(Country::Russia));
    /// assert_eq!(Country::from_code("XX"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "RU" => Some(Self::Russia),
            "DE" => Some(Self::Germany),
            "US" => Some(Self::Usa),
            "BR" => Some(Self::Brazil),
            _ => None,
        }
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Russia => "RU",
            Self::Germany => "DE",
            Self::Usa => "US",
            Self::Brazil => "BR",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_from_code_uppercase() {
        let tests = vec![
            ("RU", Country::Russia),
            ("DE", Country::Germany),
            ("US", Country::Usa),
            ("BR", Country::Brazil),
        ];

        for (input, expected) in tests {
            assert_eq!(
                Country::from_code(input),
                Some(expected),
                "Failed for input: {}",
                input
            );
        }
    }

    #[test]
    fn test_country_from_code_lowercase_and_padding() {
        assert_eq!(Country::from_code("ru"), Some(Country::Russia));
        assert_eq!(Country::from_code(" us "), Some(Country::Usa));
    }

    #[test]
    fn test_country_from_code_unknown() {
        for input in ["XX", "", "RUS", "??"] {
            assert_eq!(Country::from_code(input), None, "input: {:?}", input);
        }
    }

    #[test]
    fn test_country_code_roundtrip() {
        for country in Country::ALL {
            assert_eq!(Country::from_code(country.as_code()), Some(country));
        }
    }

    #[test]
    fn test_country_display() {
        assert_eq!(format!("{}", Country::Russia), "RU");
        assert_eq!(format!("{}", Country::Usa), "US");
    }

    #[test]
    fn test_country_serializes_as_uppercase_name() {
        assert_eq!(serde_json::to_string(&Country::Russia).unwrap(), "\"RUSSIA\"");
        assert_eq!(serde_json::to_string(&Country::Usa).unwrap(), "\"USA\"");

        let parsed: Country = serde_json::from_str("\"BRAZIL\"").unwrap();
        assert_eq!(parsed, Country::Brazil);
    }
}
