//! Yearly-recurring calendar events and their normalization to Hijri anchors.
//!
//! The two record kinds arrive with different month conventions: a Miqaat
//! stores a 1-based month, a DailyDua a 0-based month index. Both are
//! converted once, when they enter an [`EventBook`], to an [`EventAnchor`]
//! carrying a 0-based [`HijriMonth`]. Lookups compare anchors only.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::HijriDate;
use crate::consts::{LONG_MONTH_DAYS, MIN_DAY};
use crate::types::HijriMonth;

/// A named event that recurs every Hijri year on the same day and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Miqaat {
    pub id: String,
    pub name: String,
    /// Day of month (1-31)
    pub date: u8,
    /// 1-based month (1-12)
    pub month: u8,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub phase: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A devotional text assigned to a Hijri day and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDua {
    pub id: String,
    /// Day of month (1-31)
    pub date: u8,
    /// 0-based month index (0-11)
    pub month: u8,
    pub library_reference: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// The Hijri day and month an event recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EventAnchor {
    month: HijriMonth,
    day:   u8,
}

impl EventAnchor {
    /// Returns `None` if the day cannot occur in any Hijri month.
    pub fn new(month: HijriMonth, day: u8) -> Option<Self> {
        (MIN_DAY..=LONG_MONTH_DAYS)
            .contains(&day)
            .then_some(Self { month, day })
    }

    pub const fn month(&self) -> HijriMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Year-independent match on day and month.
    pub fn matches(&self, date: &HijriDate) -> bool {
        self.month == date.month_typed() && self.day == date.day()
    }
}

impl Miqaat {
    /// Anchor from the 1-based `month` field.
    pub fn anchor(&self) -> Option<EventAnchor> {
        let index = self.month.checked_sub(1)?;
        EventAnchor::new(HijriMonth::new(index).ok()?, self.date)
    }
}

impl DailyDua {
    /// Anchor from the 0-based `month` field.
    pub fn anchor(&self) -> Option<EventAnchor> {
        EventAnchor::new(HijriMonth::new(self.month).ok()?, self.date)
    }
}

/// Read-only collection of both event kinds, normalized to anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBook {
    miqaats:    Vec<(EventAnchor, Miqaat)>,
    daily_duas: Vec<(EventAnchor, DailyDua)>,
}

impl EventBook {
    /// Normalizes the records. Records whose day or month cannot occur in
    /// the Hijri calendar are dropped with a warning; they could never match.
    pub fn new(
        miqaats: impl IntoIterator<Item = Miqaat>,
        daily_duas: impl IntoIterator<Item = DailyDua>,
    ) -> Self {
        let miqaats = miqaats
            .into_iter()
            .filter_map(|miqaat| match miqaat.anchor() {
                Some(anchor) => Some((anchor, miqaat)),
                None => {
                    warn!(id = %miqaat.id, date = miqaat.date, month = miqaat.month, "skipping miqaat outside the Hijri calendar");
                    None
                },
            })
            .collect();

        let daily_duas = daily_duas
            .into_iter()
            .filter_map(|dua| match dua.anchor() {
                Some(anchor) => Some((anchor, dua)),
                None => {
                    warn!(id = %dua.id, date = dua.date, month = dua.month, "skipping daily dua outside the Hijri calendar");
                    None
                },
            })
            .collect();

        Self {
            miqaats,
            daily_duas,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.miqaats.is_empty() && self.daily_duas.is_empty()
    }

    pub fn miqaat_count(&self) -> usize {
        self.miqaats.len()
    }

    pub fn daily_dua_count(&self) -> usize {
        self.daily_duas.len()
    }

    /// Miqaats recurring on this date's day and month, in input order.
    pub fn miqaats_on(&self, date: HijriDate) -> impl Iterator<Item = &Miqaat> {
        self.miqaats
            .iter()
            .filter(move |(anchor, _)| anchor.matches(&date))
            .map(|(_, miqaat)| miqaat)
    }

    /// Daily duas recurring on this date's day and month, in input order.
    pub fn daily_duas_on(&self, date: HijriDate) -> impl Iterator<Item = &DailyDua> {
        self.daily_duas
            .iter()
            .filter(move |(anchor, _)| anchor.matches(&date))
            .map(|(_, dua)| dua)
    }

    pub fn important_miqaats(&self) -> impl Iterator<Item = &Miqaat> {
        self.miqaats
            .iter()
            .map(|(_, miqaat)| miqaat)
            .filter(|miqaat| miqaat.important)
    }
}
