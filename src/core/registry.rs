//! Canonical country list.
//!
//! The order of [`COUNTRY_TABLE`] is observable: it is the dropdown order and
//! the tie-break order used by the name resolver.

use crate::domain::model::Country;
use crate::utils::error::{GlobalDriveError, Result};
use std::collections::HashSet;
use std::sync::LazyLock;

/// `(ISO 3166-1 alpha-2, display name, flag)`
const COUNTRY_TABLE: &[(&str, &str, &str)] = &[
    ("AF", "Afghanistan", "🇦🇫"),
    ("AL", "Albania", "🇦🇱"),
    ("DZ", "Algeria", "🇩🇿"),
    ("AR", "Argentina", "🇦🇷"),
    ("AM", "Armenia", "🇦🇲"),
    ("AU", "Australia", "🇦🇺"),
    ("AT", "Austria", "🇦🇹"),
    ("AZ", "Azerbaijan", "🇦🇿"),
    ("BS", "Bahamas", "🇧🇸"),
    ("BH", "Bahrain", "🇧🇭"),
    ("BD", "Bangladesh", "🇧🇩"),
    ("BY", "Belarus", "🇧🇾"),
    ("BE", "Belgium", "🇧🇪"),
    ("BO", "Bolivia", "🇧🇴"),
    ("BA", "Bosnia and Herzegovina", "🇧🇦"),
    ("BW", "Botswana", "🇧🇼"),
    ("BR", "Brazil", "🇧🇷"),
    ("BG", "Bulgaria", "🇧🇬"),
    ("KH", "Cambodia", "🇰🇭"),
    ("CM", "Cameroon", "🇨🇲"),
    ("CA", "Canada", "🇨🇦"),
    ("CL", "Chile", "🇨🇱"),
    ("CN", "China", "🇨🇳"),
    ("CO", "Colombia", "🇨🇴"),
    ("CD", "Congo (DRC)", "🇨🇩"),
    ("CG", "Congo (Republic)", "🇨🇬"),
    ("CR", "Costa Rica", "🇨🇷"),
    ("HR", "Croatia", "🇭🇷"),
    ("CU", "Cuba", "🇨🇺"),
    ("CY", "Cyprus", "🇨🇾"),
    ("CZ", "Czechia", "🇨🇿"),
    ("DK", "Denmark", "🇩🇰"),
    ("DO", "Dominican Republic", "🇩🇴"),
    ("EC", "Ecuador", "🇪🇨"),
    ("EG", "Egypt", "🇪🇬"),
    ("SV", "El Salvador", "🇸🇻"),
    ("EE", "Estonia", "🇪🇪"),
    ("ET", "Ethiopia", "🇪🇹"),
    ("FJ", "Fiji", "🇫🇯"),
    ("FI", "Finland", "🇫🇮"),
    ("FR", "France", "🇫🇷"),
    ("GE", "Georgia", "🇬🇪"),
    ("DE", "Germany", "🇩🇪"),
    ("GH", "Ghana", "🇬🇭"),
    ("GR", "Greece", "🇬🇷"),
    ("GT", "Guatemala", "🇬🇹"),
    ("HN", "Honduras", "🇭🇳"),
    ("HK", "Hong Kong", "🇭🇰"),
    ("HU", "Hungary", "🇭🇺"),
    ("IS", "Iceland", "🇮🇸"),
    ("IN", "India", "🇮🇳"),
    ("ID", "Indonesia", "🇮🇩"),
    ("IR", "Iran", "🇮🇷"),
    ("IQ", "Iraq", "🇮🇶"),
    ("IE", "Ireland", "🇮🇪"),
    ("IL", "Israel", "🇮🇱"),
    ("IT", "Italy", "🇮🇹"),
    ("CI", "Ivory Coast", "🇨🇮"),
    ("JM", "Jamaica", "🇯🇲"),
    ("JP", "Japan", "🇯🇵"),
    ("JO", "Jordan", "🇯🇴"),
    ("KZ", "Kazakhstan", "🇰🇿"),
    ("KE", "Kenya", "🇰🇪"),
    ("KW", "Kuwait", "🇰🇼"),
    ("LA", "Laos", "🇱🇦"),
    ("LV", "Latvia", "🇱🇻"),
    ("LB", "Lebanon", "🇱🇧"),
    ("LT", "Lithuania", "🇱🇹"),
    ("LU", "Luxembourg", "🇱🇺"),
    ("MY", "Malaysia", "🇲🇾"),
    ("MT", "Malta", "🇲🇹"),
    ("MX", "Mexico", "🇲🇽"),
    ("MD", "Moldova", "🇲🇩"),
    ("MN", "Mongolia", "🇲🇳"),
    ("ME", "Montenegro", "🇲🇪"),
    ("MA", "Morocco", "🇲🇦"),
    ("MZ", "Mozambique", "🇲🇿"),
    ("MM", "Myanmar", "🇲🇲"),
    ("NA", "Namibia", "🇳🇦"),
    ("NP", "Nepal", "🇳🇵"),
    ("NL", "Netherlands", "🇳🇱"),
    ("NZ", "New Zealand", "🇳🇿"),
    ("NI", "Nicaragua", "🇳🇮"),
    ("NE", "Niger", "🇳🇪"),
    ("NG", "Nigeria", "🇳🇬"),
    ("KP", "North Korea", "🇰🇵"),
    ("MK", "North Macedonia", "🇲🇰"),
    ("NO", "Norway", "🇳🇴"),
    ("OM", "Oman", "🇴🇲"),
    ("PK", "Pakistan", "🇵🇰"),
    ("PA", "Panama", "🇵🇦"),
    ("PY", "Paraguay", "🇵🇾"),
    ("PE", "Peru", "🇵🇪"),
    ("PH", "Philippines", "🇵🇭"),
    ("PL", "Poland", "🇵🇱"),
    ("PT", "Portugal", "🇵🇹"),
    ("QA", "Qatar", "🇶🇦"),
    ("RO", "Romania", "🇷🇴"),
    ("RU", "Russia", "🇷🇺"),
    ("SA", "Saudi Arabia", "🇸🇦"),
    ("SN", "Senegal", "🇸🇳"),
    ("RS", "Serbia", "🇷🇸"),
    ("SG", "Singapore", "🇸🇬"),
    ("SK", "Slovakia", "🇸🇰"),
    ("SI", "Slovenia", "🇸🇮"),
    ("ZA", "South Africa", "🇿🇦"),
    ("KR", "South Korea", "🇰🇷"),
    ("SS", "South Sudan", "🇸🇸"),
    ("ES", "Spain", "🇪🇸"),
    ("LK", "Sri Lanka", "🇱🇰"),
    ("SD", "Sudan", "🇸🇩"),
    ("SE", "Sweden", "🇸🇪"),
    ("CH", "Switzerland", "🇨🇭"),
    ("SY", "Syria", "🇸🇾"),
    ("TW", "Taiwan", "🇹🇼"),
    ("TZ", "Tanzania", "🇹🇿"),
    ("TH", "Thailand", "🇹🇭"),
    ("TN", "Tunisia", "🇹🇳"),
    ("TR", "Turkey", "🇹🇷"),
    ("UG", "Uganda", "🇺🇬"),
    ("UA", "Ukraine", "🇺🇦"),
    ("AE", "United Arab Emirates", "🇦🇪"),
    ("GB", "United Kingdom", "🇬🇧"),
    ("US", "United States", "🇺🇸"),
    ("UY", "Uruguay", "🇺🇾"),
    ("UZ", "Uzbekistan", "🇺🇿"),
    ("VE", "Venezuela", "🇻🇪"),
    ("VN", "Vietnam", "🇻🇳"),
    ("ZM", "Zambia", "🇿🇲"),
    ("ZW", "Zimbabwe", "🇿🇼"),
];

static BUILTIN: LazyLock<CountryRegistry> = LazyLock::new(|| CountryRegistry {
    countries: COUNTRY_TABLE
        .iter()
        .map(|(code, name, flag)| Country::new(code, name, flag))
        .collect(),
});

#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: Vec<Country>,
}

impl CountryRegistry {
    /// Process-wide registry built from the compiled-in table.
    pub fn builtin() -> &'static CountryRegistry {
        &BUILTIN
    }

    /// Builds a registry over custom data, keeping the given order.
    pub fn from_entries(countries: Vec<Country>) -> Result<Self> {
        let mut codes = HashSet::new();
        let mut names = HashSet::new();

        for country in &countries {
            if !codes.insert(country.code.to_ascii_uppercase()) {
                return Err(GlobalDriveError::ValidationError {
                    message: format!("duplicate country code '{}'", country.code),
                });
            }
            if !names.insert(country.name.as_str()) {
                return Err(GlobalDriveError::ValidationError {
                    message: format!("duplicate country name '{}'", country.name),
                });
            }
        }

        Ok(Self { countries })
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn by_code(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
