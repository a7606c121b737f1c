//! Open/closed status of the warehouse office.
//!
//! Pure function of a UTC instant, a civil time zone and a weekly table.
//! The footer re-evaluates it about once a minute.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const OPEN_NOW_LABEL: &str = "Open Now";

/// Opening interval of one day, whole hours, `[open_hour, close_hour)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl OpeningHours {
    pub const fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }

    /// "9:00 AM – 5:00 PM"
    pub fn label(&self) -> String {
        format!("{} – {}", format_hour(self.open_hour), format_hour(self.close_hour))
    }
}

/// Hours per weekday, Monday first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [Option<OpeningHours>; 7],
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::canonical()
    }
}

/// One line of the hours table shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub days: String,
    pub hours: String,
    pub open: bool,
}

/// Derived status: flag plus the text shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursStatus {
    pub open: bool,
    pub label: String,
}

impl WeeklySchedule {
    /// Mon–Fri 9–17, Sat 9–16, Sun closed
    pub const fn canonical() -> Self {
        let weekday = Some(OpeningHours::new(9, 17));
        Self {
            days: [
                weekday,
                weekday,
                weekday,
                weekday,
                weekday,
                Some(OpeningHours::new(9, 16)),
                None,
            ],
        }
    }

    pub const fn from_days(days: [Option<OpeningHours>; 7]) -> Self {
        Self { days }
    }

    pub fn hours_on(&self, weekday: Weekday) -> Option<OpeningHours> {
        self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn is_open_at(&self, local: NaiveDateTime) -> bool {
        self.hours_on(local.weekday())
            .map(|h| h.contains_hour(local.hour()))
            .unwrap_or(false)
    }

    /// Status for a wall-clock time already expressed in the schedule's zone.
    ///
    /// Closed on a working day shows that day's hours; closed on a day off
    /// shows the next opening ("Opens Monday at 9:00 AM").
    pub fn status_at(&self, local: NaiveDateTime) -> BusinessHoursStatus {
        let today = local.weekday();
        match self.hours_on(today) {
            Some(hours) if hours.contains_hour(local.hour()) => BusinessHoursStatus {
                open: true,
                label: OPEN_NOW_LABEL.to_string(),
            },
            Some(hours) => BusinessHoursStatus {
                open: false,
                label: hours.label(),
            },
            None => BusinessHoursStatus {
                open: false,
                label: self.next_opening_label(today),
            },
        }
    }

    fn next_opening_label(&self, today: Weekday) -> String {
        let mut day = today.succ();
        for _ in 0..7 {
            if let Some(hours) = self.hours_on(day) {
                return format!("Opens {} at {}", weekday_name(day), format_hour(hours.open_hour));
            }
            day = day.succ();
        }
        "Closed".to_string()
    }

    /// Table rows with consecutive days of equal hours collapsed
    pub fn display_rows(&self) -> Vec<ScheduleRow> {
        let mut rows = Vec::new();
        let mut start = 0usize;

        while start < 7 {
            let hours = self.days[start];
            let mut end = start;
            while end + 1 < 7 && self.days[end + 1] == hours {
                end += 1;
            }

            let first = weekday_from_index(start);
            let days = if end == start {
                weekday_name(first).to_string()
            } else {
                format!("{} – {}", weekday_name(first), weekday_name(weekday_from_index(end)))
            };

            rows.push(ScheduleRow {
                days,
                hours: hours.map(|h| h.label()).unwrap_or_else(|| "Closed".to_string()),
                open: hours.is_some(),
            });
            start = end + 1;
        }
        rows
    }
}

/// Zone the office hours are published in
pub const OFFICE_TIME_ZONE: Tz = chrono_tz::America::New_York;

/// Schedule bound to its civil zone
#[derive(Debug, Clone)]
pub struct BusinessHoursClock {
    schedule: WeeklySchedule,
    zone: Tz,
}

impl Default for BusinessHoursClock {
    fn default() -> Self {
        Self::new(WeeklySchedule::canonical())
    }
}

impl BusinessHoursClock {
    pub fn new(schedule: WeeklySchedule) -> Self {
        Self::with_zone(schedule, OFFICE_TIME_ZONE)
    }

    pub fn with_zone(schedule: WeeklySchedule, zone: Tz) -> Self {
        Self { schedule, zone }
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Wall-clock time in the office zone
    pub fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.zone).naive_local()
    }

    pub fn status(&self, now: DateTime<Utc>) -> BusinessHoursStatus {
        self.schedule.status_at(self.local_time(now))
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// 9 -> "9:00 AM", 17 -> "5:00 PM", 0 and 24 -> "12:00 AM"
pub fn format_hour(hour: u32) -> String {
    let hour = hour % 24;
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:00 {}", display, suffix)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn weekday_from_index(index: usize) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&local(y, m, d, h, min))
    }

    #[test]
    fn test_tuesday_afternoon_is_open() {
        let status = WeeklySchedule::canonical().status_at(local(2024, 7, 2, 14, 0));
        assert!(status.open);
        assert_eq!(status.label, "Open Now");
    }

    #[test]
    fn test_saturday_evening_is_closed() {
        let status = WeeklySchedule::canonical().status_at(local(2024, 7, 6, 17, 30));
        assert!(!status.open);
        assert_eq!(status.label, "9:00 AM – 4:00 PM");
    }

    #[test]
    fn test_sunday_is_closed_all_day() {
        let schedule = WeeklySchedule::canonical();
        for hour in [0, 9, 12, 16, 23] {
            let status = schedule.status_at(local(2024, 7, 7, hour, 0));
            assert!(!status.open);
            assert_eq!(status.label, "Opens Monday at 9:00 AM");
        }
    }

    #[test]
    fn test_closing_hour_is_exclusive() {
        let schedule = WeeklySchedule::canonical();
        assert!(schedule.is_open_at(local(2024, 7, 1, 9, 0)));
        assert!(schedule.is_open_at(local(2024, 7, 1, 16, 59)));
        assert!(!schedule.is_open_at(local(2024, 7, 1, 17, 0)));
        assert!(!schedule.is_open_at(local(2024, 7, 6, 16, 0)));
        assert!(!schedule.is_open_at(local(2024, 7, 1, 8, 59)));
    }

    #[test]
    fn test_eastern_offsets_summer_and_winter() {
        let clock = BusinessHoursClock::default();
        assert_eq!(clock.local_time(utc(2024, 7, 2, 18, 0)), local(2024, 7, 2, 14, 0));
        assert_eq!(clock.local_time(utc(2024, 1, 9, 19, 0)), local(2024, 1, 9, 14, 0));
    }

    #[test]
    fn test_eastern_dst_boundaries() {
        let clock = BusinessHoursClock::default();
        assert_eq!(clock.local_time(utc(2024, 3, 10, 6, 59)), local(2024, 3, 10, 1, 59));
        assert_eq!(clock.local_time(utc(2024, 3, 10, 7, 0)), local(2024, 3, 10, 3, 0));
        assert_eq!(clock.local_time(utc(2024, 11, 3, 5, 59)), local(2024, 11, 3, 1, 59));
        assert_eq!(clock.local_time(utc(2024, 11, 3, 6, 0)), local(2024, 11, 3, 1, 0));
    }

    #[test]
    fn test_other_zone_shifts_status() {
        let in_utc = BusinessHoursClock::with_zone(WeeklySchedule::canonical(), chrono_tz::UTC);
        // 20:00 UTC on a Tuesday is 16:00 EDT
        assert!(!in_utc.status(utc(2024, 7, 2, 20, 0)).open);
        assert!(BusinessHoursClock::default().status(utc(2024, 7, 2, 20, 0)).open);
    }

    #[test]
    fn test_clock_uses_eastern_time() {
        let clock = BusinessHoursClock::default();
        // 21:30 UTC on a Friday in July is 17:30 EDT
        assert!(!clock.status(utc(2024, 7, 5, 21, 30)).open);
        // same UTC time in January is 16:30 EST
        assert!(clock.status(utc(2024, 1, 5, 21, 30)).open);
    }

    #[test]
    fn test_display_rows_collapse_equal_days() {
        let rows = WeeklySchedule::canonical().display_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].days, "Monday – Friday");
        assert_eq!(rows[0].hours, "9:00 AM – 5:00 PM");
        assert_eq!(rows[1].days, "Saturday");
        assert_eq!(rows[2].hours, "Closed");
        assert!(!rows[2].open);
    }

    #[test]
    fn test_next_opening_skips_several_closed_days() {
        let mut days = [None; 7];
        days[2] = Some(OpeningHours::new(10, 14));
        let schedule = WeeklySchedule::from_days(days);
        let status = schedule.status_at(local(2024, 7, 5, 12, 0));
        assert_eq!(status.label, "Opens Wednesday at 10:00 AM");

        let never = WeeklySchedule::from_days([None; 7]);
        assert_eq!(never.status_at(local(2024, 7, 5, 12, 0)).label, "Closed");
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(9), "9:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(17), "5:00 PM");
    }
}
