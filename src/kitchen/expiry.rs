// Copyright 2023 Remi Bernotavicius

use super::models::FridgeItem;
use chrono::NaiveDate;
use derive_more::Display;

pub const DEFAULT_EXPIRING_SOON_DAYS: u64 = 3;

#[derive(Debug, Display, Hash, Copy, Clone, PartialEq, Eq)]
pub enum ExpiryStatus {
    #[display("expired")]
    Expired,
    #[display("expiring soon")]
    ExpiringSoon,
    #[display("fresh")]
    Fresh,
}

impl ExpiryStatus {
    /// Both ends of the expiring-soon window are inclusive: an item expiring today, or exactly
    /// `window_days` from today, is expiring soon.
    pub fn classify(today: NaiveDate, expiry: NaiveDate, window_days: u64) -> Self {
        if expiry < today {
            return Self::Expired;
        }
        let window_end = today
            .checked_add_days(chrono::Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);
        if expiry <= window_end {
            Self::ExpiringSoon
        } else {
            Self::Fresh
        }
    }

    pub fn color(&self) -> egui::Color32 {
        match self {
            Self::Expired => egui::Color32::RED,
            Self::ExpiringSoon => egui::Color32::YELLOW,
            Self::Fresh => egui::Color32::GREEN,
        }
    }
}

impl FridgeItem {
    pub fn status(&self, today: NaiveDate, window_days: u64) -> ExpiryStatus {
        ExpiryStatus::classify(today, self.expiry, window_days)
    }
}

pub fn count_expiring_soon<'a>(
    items: impl IntoIterator<Item = &'a FridgeItem>,
    today: NaiveDate,
    window_days: u64,
) -> usize {
    items
        .into_iter()
        .filter(|i| i.status(today, window_days) == ExpiryStatus::ExpiringSoon)
        .count()
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn classify_boundaries() {
    use ExpiryStatus::*;

    let today = date(2025, 9, 11);
    let classify = |d| ExpiryStatus::classify(today, d, DEFAULT_EXPIRING_SOON_DAYS);

    assert_eq!(classify(date(2024, 1, 1)), Expired);
    assert_eq!(classify(date(2025, 9, 10)), Expired);
    assert_eq!(classify(date(2025, 9, 11)), ExpiringSoon);
    assert_eq!(classify(date(2025, 9, 12)), ExpiringSoon);
    assert_eq!(classify(date(2025, 9, 14)), ExpiringSoon);
    assert_eq!(classify(date(2025, 9, 15)), Fresh);
    assert_eq!(classify(date(2026, 9, 11)), Fresh);
}

#[test]
fn classify_across_month_end() {
    use ExpiryStatus::*;

    let today = date(2024, 2, 27);
    assert_eq!(ExpiryStatus::classify(today, date(2024, 3, 1), 3), ExpiringSoon);
    assert_eq!(ExpiryStatus::classify(today, date(2024, 3, 2), 3), Fresh);
}

#[test]
fn classify_zero_day_window() {
    use ExpiryStatus::*;

    let today = date(2025, 9, 11);
    assert_eq!(ExpiryStatus::classify(today, today, 0), ExpiringSoon);
    assert_eq!(ExpiryStatus::classify(today, date(2025, 9, 12), 0), Fresh);
}

#[test]
fn classify_near_end_of_calendar() {
    let today = NaiveDate::MAX;
    assert_eq!(
        ExpiryStatus::classify(today, NaiveDate::MAX, 3),
        ExpiryStatus::ExpiringSoon
    );
    assert_eq!(
        ExpiryStatus::classify(today, date(2025, 9, 11), 3),
        ExpiryStatus::Expired
    );
}

#[test]
fn status_colors() {
    assert_eq!(ExpiryStatus::Expired.color(), egui::Color32::RED);
    assert_eq!(ExpiryStatus::ExpiringSoon.color(), egui::Color32::YELLOW);
    assert_eq!(ExpiryStatus::Fresh.color(), egui::Color32::GREEN);
    assert_eq!(ExpiryStatus::ExpiringSoon.to_string(), "expiring soon");
}

#[test]
fn count_only_expiring_soon() {
    use super::models::FridgeItemId;

    let today = date(2025, 9, 11);
    let mut id = FridgeItemId::INITIAL;
    let items: Vec<_> = [date(2025, 9, 13), date(2025, 9, 10), date(2025, 9, 21)]
        .into_iter()
        .map(|expiry| {
            let item = FridgeItem {
                id,
                name: "item".into(),
                quantity: "1".into(),
                expiry,
            };
            id = id.next();
            item
        })
        .collect();

    assert_eq!(count_expiring_soon(&items, today, 3), 1);
    assert_eq!(count_expiring_soon(&items, today, 10), 2);
    assert_eq!(count_expiring_soon(&Vec::new(), today, 3), 0);
}
