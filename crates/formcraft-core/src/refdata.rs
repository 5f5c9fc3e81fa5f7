//! Static reference data: the location hierarchy and phone country table
//!
//! Both tables are immutable constants consumed by the validator and by
//! renderers. Order is significant: it is the order controls list choices in.

/// Country → states → cities, in display order.
pub static LOCATIONS: &[(&str, &[(&str, &[&str])])] = &[
	(
		"USA",
		&[
			("California", &["Los Angeles", "San Francisco", "San Diego"]),
			("Texas", &["Houston", "Dallas", "Austin"]),
			("NewYork", &["New York City", "Buffalo", "Rochester"]),
		],
	),
	(
		"India",
		&[
			("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
			("Karnataka", &["Bengaluru", "Mysuru", "Mangaluru"]),
			("Delhi", &["New Delhi", "Dwarka", "Rohini"]),
		],
	),
	(
		"Canada",
		&[
			("Ontario", &["Toronto", "Ottawa", "Hamilton"]),
			("Quebec", &["Montreal", "Quebec City", "Laval"]),
			("BC", &["Vancouver", "Victoria", "Richmond"]),
		],
	),
];

/// Countries offered by the location cascade.
pub fn countries() -> impl Iterator<Item = &'static str> {
	LOCATIONS.iter().map(|(country, _)| *country)
}

/// States for a country; empty for an unknown country.
pub fn states(country: &str) -> &'static [(&'static str, &'static [&'static str])] {
	LOCATIONS
		.iter()
		.find(|(name, _)| *name == country)
		.map(|(_, states)| *states)
		.unwrap_or(&[])
}

/// Cities for a country/state pair; empty when either level is unknown.
pub fn cities(country: &str, state: &str) -> &'static [&'static str] {
	states(country)
		.iter()
		.find(|(name, _)| *name == state)
		.map(|(_, cities)| *cities)
		.unwrap_or(&[])
}

/// One row of the phone country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneCountry {
	/// ISO-style country code used in phone values.
	pub code: &'static str,
	pub label: &'static str,
	/// Dial prefix shown next to the code.
	pub dial: &'static str,
	/// Canonical digit count for a local number.
	pub digits: usize,
}

/// Country code → dial prefix and canonical digit length, in display order.
pub static PHONE_COUNTRIES: &[PhoneCountry] = &[
	PhoneCountry { code: "US", label: "United States", dial: "+1", digits: 10 },
	PhoneCountry { code: "IN", label: "India", dial: "+91", digits: 10 },
	PhoneCountry { code: "GB", label: "United Kingdom", dial: "+44", digits: 10 },
	PhoneCountry { code: "CA", label: "Canada", dial: "+1", digits: 10 },
	PhoneCountry { code: "AU", label: "Australia", dial: "+61", digits: 9 },
];

/// The country code a phone control starts from when nothing is selected.
pub const DEFAULT_PHONE_COUNTRY: &str = "US";

/// Look up a phone country by code.
///
/// # Examples
///
/// ```
/// use formcraft_core::refdata;
///
/// let australia = refdata::phone_country("AU").unwrap();
/// assert_eq!(australia.digits, 9);
/// assert!(refdata::phone_country("ZZ").is_none());
/// ```
pub fn phone_country(code: &str) -> Option<&'static PhoneCountry> {
	PHONE_COUNTRIES.iter().find(|country| country.code == code)
}
