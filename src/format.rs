//! Display helpers: month name tables and Arabic-Indic digit rendering.

/// Full Hijri month names, indexed by 0-based month
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Moharram al-Haraam",
    "Safar al-Muzaffar",
    "Rabi al-Awwal",
    "Rabi al-Aakhar",
    "Jumada al-Ula",
    "Jumada al-Ukhra",
    "Rajab al-Asab",
    "Shabaan al-Karim",
    "Ramadaan al-Moazzam",
    "Shawwal al-Mukarram",
    "Zilqadah al-Haraam",
    "Zilhaj al-Haraam",
];

/// Short Hijri month names, indexed by 0-based month
pub const HIJRI_MONTH_SHORT_NAMES: [&str; 12] = [
    "Moharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shabaan",
    "Ramadaan",
    "Shawwal",
    "Zilqadah",
    "Zilhaj",
];

/// Gregorian month names (index 0 unused, months are 1-indexed)
pub const GREGORIAN_MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Maps a single ASCII digit to its Arabic-Indic counterpart; other
/// characters pass through unchanged.
pub fn arabic_indic_digit(c: char) -> char {
    c.to_digit(10)
        .and_then(|d| char::from_u32(ARABIC_INDIC_ZERO + d))
        .unwrap_or(c)
}

/// Renders a number digit by digit in Arabic-Indic numerals.
pub fn to_arabic_numerals(value: impl ToString) -> String {
    value.to_string().chars().map(arabic_indic_digit).collect()
}

/// Gregorian month name for a 1-based month, empty when out of range.
pub fn gregorian_month_name(month: u8) -> &'static str {
    GREGORIAN_MONTH_NAMES
        .get(usize::from(month))
        .copied()
        .unwrap_or_default()
}
