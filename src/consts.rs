/// Astronomical Julian Day of the tabular Hijri epoch (the day before 1 Muharram, year 0)
pub const HIJRI_EPOCH: f64 = 1_948_083.5;

/// Number of years in one Hijri leap cycle
pub const CYCLE_YEARS: u32 = 30;

/// Number of days in one full 30-year Hijri cycle
pub const CYCLE_DAYS: i64 = 10_631;

/// Number of months in a Hijri year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Index of the last Hijri month (Zilhaj), the only month whose length depends on the year
pub const LAST_MONTH: u8 = MONTHS_PER_YEAR - 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in a 30-day (even-indexed) Hijri month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Days in a 29-day (odd-indexed) Hijri month
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Year-in-cycle remainders (`year % 30`) that are leap years
pub const LEAP_YEAR_REMAINDERS: [u32; 11] = [2, 5, 8, 10, 13, 16, 19, 21, 24, 27, 29];

/// Days elapsed in a cycle before each year-in-cycle index (0..30)
pub const CYCLE_CUMULATIVE_DAYS: [i64; 30] = [
    0, 354, 708, 1063, 1417, 1771, 2126, 2480, 2834, 3189, //
    3543, 3898, 4252, 4606, 4961, 5315, 5669, 6024, 6378, 6732, //
    7087, 7441, 7796, 8150, 8504, 8859, 9213, 9567, 9922, 10276,
];

/// Days elapsed in a year before each month index (0..12)
pub const MONTH_CUMULATIVE_DAYS: [i64; 12] = [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325];

/// Day number (integer part of `ajd + 0.5`) from which Gregorian decoding applies
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

/// First day of the Gregorian calendar as `(year, month, day)`.
/// Everything earlier, including the ten skipped days, is read as Julian.
pub const GREGORIAN_REFORM: (i32, u8, u8) = (1582, 10, 15);

/// Number of days in a week
pub const DAYS_IN_WEEK: usize = 7;

/// Default lowest year reachable by navigation
pub const DEFAULT_MIN_YEAR: u32 = 1000;
/// Default highest year reachable by navigation
pub const DEFAULT_MAX_YEAR: u32 = 3000;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Year range separator
pub const RANGE_SEPARATOR: char = '/';
