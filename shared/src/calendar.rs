//! Calendar math for the date picker: month navigation and day-grid
//! generation. The grid is recomputed from scratch on every navigation; no
//! state is kept here beyond what the caller passes in.

use chrono::{Datelike, NaiveDate};

use crate::models::{CalendarDay, CalendarDayType, CalendarMonth};

/// Stateless service for the date-picker's month/year computations.
#[derive(Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Number of days in a given month and year.
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the first of the month (0 = Sunday, 1 = Monday, ...).
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            0
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Navigate to the previous month, wrapping January into the previous
    /// year's December.
    pub fn previous_month(&self, month: u32, year: u32) -> (u32, u32) {
        if month == 1 {
            (12, year - 1)
        } else {
            (month - 1, year)
        }
    }

    /// Navigate to the next month, wrapping December into the next year's
    /// January.
    pub fn next_month(&self, month: u32, year: u32) -> (u32, u32) {
        if month == 12 {
            (1, year + 1)
        } else {
            (month + 1, year)
        }
    }

    /// Generate the day grid for a month: leading padding cells equal to the
    /// first-of-month's weekday offset, then one cell per day.
    pub fn generate_calendar_month(&self, month: u32, year: u32) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        let mut days = Vec::with_capacity((first_day + days_in_month) as usize);

        for _ in 0..first_day {
            days.push(CalendarDay {
                day: 0,
                date: String::new(),
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            days.push(CalendarDay {
                day,
                date: format!("{year:04}-{month:02}-{day:02}"),
                day_type: CalendarDayType::MonthDay,
            });
        }

        CalendarMonth {
            month,
            year,
            days,
            first_day_of_week: first_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(1, 2025), 31);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        let service = CalendarService::new();

        for year in [1999u32, 2000, 2023, 2024] {
            for month in 1..=12u32 {
                let first = NaiveDate::from_ymd_opt(year as i32, month, 1).unwrap();
                let (next_month, next_year) = service.next_month(month, year);
                let next_first =
                    NaiveDate::from_ymd_opt(next_year as i32, next_month, 1).unwrap();
                let expected = next_first.signed_duration_since(first).num_days() as u32;
                assert_eq!(service.days_in_month(month, year), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(service.is_leap_year(2000)); // Divisible by 400
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        // 2024-12-01 was a Sunday, 2025-01-01 a Wednesday.
        assert_eq!(service.first_day_of_month(12, 2024), 0);
        assert_eq!(service.first_day_of_month(1, 2025), 3);
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_navigation_wraps_year_boundaries() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(6, 2025), (5, 2025));
        assert_eq!(service.previous_month(1, 2025), (12, 2024));

        assert_eq!(service.next_month(6, 2025), (7, 2025));
        assert_eq!(service.next_month(12, 2024), (1, 2025));
    }

    #[test]
    fn test_generate_calendar_month_shape() {
        let service = CalendarService::new();

        // December 2024 starts on a Sunday: no padding, 31 day cells.
        let december = service.generate_calendar_month(12, 2024);
        assert_eq!(december.first_day_of_week, 0);
        assert_eq!(december.days.len(), 31);
        assert!(december
            .days
            .iter()
            .all(|d| d.day_type == CalendarDayType::MonthDay));

        // January 2025 starts on a Wednesday: 3 padding cells, then 31 days.
        let january = service.generate_calendar_month(1, 2025);
        assert_eq!(january.first_day_of_week, 3);
        assert_eq!(january.days.len(), 3 + 31);
        assert!(january.days[..3]
            .iter()
            .all(|d| d.day_type == CalendarDayType::PaddingBefore));
        assert_eq!(january.days[3].day, 1);
        assert_eq!(january.days[3].date, "2025-01-01");
        assert_eq!(january.days.last().unwrap().date, "2025-01-31");
    }

    #[test]
    fn test_generate_calendar_month_date_strings_are_padded() {
        let service = CalendarService::new();

        let march = service.generate_calendar_month(3, 2025);
        let day_5 = march
            .days
            .iter()
            .find(|d| d.day == 5 && d.day_type == CalendarDayType::MonthDay)
            .unwrap();
        assert_eq!(day_5.date, "2025-03-05");
    }
}
