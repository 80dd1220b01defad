//! Calendar Engine
//!
//! Month grids for the date picker. A grid always holds 42 days (6 weeks,
//! Monday first) so the picker keeps a fixed height whatever the month's
//! length or starting weekday:
//!
//! ```text
//!  Lun Mar Mié Jue Vie Sáb Dom
//!   28  29  30   1   2   3   4    <- trailing days of the previous month
//!    5   6   7   8   9  10  11
//!  ...
//!   26  27  28  29  30  31   1    <- leading days of the next month
//! ```
//!
//! All predicates are pure; "today" is always passed in by the caller.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Number of cells in a month grid (6 weeks × 7 days)
pub const GRID_CELLS: usize = 42;

/// Weekday headers, Monday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Reference month shown by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    first: NaiveDate,
}

impl MonthRef {
    /// Month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Month from a year and a zero-based month; months past 11 roll into
    /// the following years
    pub fn from_zero_based(year: i32, month0: u32) -> Option<Self> {
        let extra_years = i32::try_from(month0 / 12).ok()?;
        Self::new(year.checked_add(extra_years)?, month0 % 12 + 1)
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let first = date
            .checked_sub_days(Days::new(u64::from(date.day0())))
            .unwrap_or(date);
        Self { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Zero-based month number
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Days of the previous month shown before the 1st (Monday = 0 … Sunday = 6)
    pub fn leading_days(&self) -> u32 {
        (self.first.weekday().num_days_from_sunday() + 6) % 7
    }

    /// Following month; saturates at the end of the representable range
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Preceding month; saturates at the start of the representable range
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Month name in the product locale
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0() as usize]
    }

    /// Header title, e.g. `"octubre 2026"`
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year())
    }
}

/// The 42 dates of the grid for `month`, in display order
pub fn month_grid(month: MonthRef) -> Vec<NaiveDate> {
    let first = month.first_day();
    let start = first
        .checked_sub_days(Days::new(u64::from(month.leading_days())))
        .unwrap_or(first);
    start.iter_days().take(GRID_CELLS).collect()
}

/// Bookable: not before today
pub fn is_available(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_day(date, today)
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_same_month(date: NaiveDate, month: MonthRef) -> bool {
    date.year() == month.year() && date.month() == month.month()
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Long Spanish date, e.g. `"lunes, 19 de octubre de 2026"`
pub fn format_long_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    };
    format!(
        "{weekday}, {} de {} de {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

/// One rendered day of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_available: bool,
    pub is_selected: bool,
}

/// Month grid with per-day flags, rebuilt on every navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthView {
    pub month: MonthRef,
    pub cells: Vec<DayCell>,
}

impl CalendarMonthView {
    pub fn build(month: MonthRef, today: NaiveDate, selected: Option<NaiveDate>) -> Self {
        let cells = month_grid(month)
            .into_iter()
            .map(|date| DayCell {
                date,
                in_month: is_same_month(date, month),
                is_today: is_today(date, today),
                is_weekend: is_weekend(date),
                is_available: is_available(date, today),
                is_selected: selected.is_some_and(|s| is_same_day(date, s)),
            })
            .collect();

        Self { month, cells }
    }

    /// Column headers matching each row of [`weeks`](Self::weeks)
    pub fn headers(&self) -> &'static [&'static str; 7] {
        &WEEKDAY_HEADERS
    }

    /// Rows of seven days
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_always_42_with_first_on_its_weekday() {
        for year in 1900..=2100 {
            for month0 in 0..12 {
                let month = MonthRef::from_zero_based(year, month0).unwrap();
                let grid = month_grid(month);
                assert_eq!(grid.len(), GRID_CELLS, "{year}-{month0}");

                let first = month.first_day();
                let idx = grid.iter().position(|d| *d == first).unwrap();
                assert_eq!(idx as u32, first.weekday().num_days_from_monday());
            }
        }
    }

    #[test]
    fn test_grid_is_consecutive_days() {
        let grid = month_grid(MonthRef::new(2024, 2).unwrap());
        for pair in grid.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    #[test]
    fn test_grid_padding_for_october_2026() {
        // 1 October 2026 is a Thursday
        let month = MonthRef::new(2026, 10).unwrap();
        let grid = month_grid(month);

        assert_eq!(month.leading_days(), 3);
        assert_eq!(&grid[..4], &[date(2026, 9, 28), date(2026, 9, 29), date(2026, 9, 30), date(2026, 10, 1)]);
        assert_eq!(grid[3 + 30], date(2026, 10, 31));
        assert_eq!(grid[34], date(2026, 11, 1));
        assert_eq!(*grid.last().unwrap(), date(2026, 11, 8));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_days() {
        // 1 June 2026 is a Monday
        let month = MonthRef::new(2026, 6).unwrap();
        assert_eq!(month.leading_days(), 0);
        assert_eq!(month_grid(month)[0], date(2026, 6, 1));
    }

    #[test]
    fn test_month_starting_on_sunday_has_six_leading_days() {
        // 1 February 2026 is a Sunday
        let month = MonthRef::new(2026, 2).unwrap();
        assert_eq!(month.leading_days(), 6);
        assert_eq!(month_grid(month)[6], date(2026, 2, 1));
    }

    #[test]
    fn test_zero_based_month_rolls_over() {
        let month = MonthRef::from_zero_based(2026, 12).unwrap();
        assert_eq!((month.year(), month.month()), (2027, 1));
        assert_eq!(MonthRef::from_zero_based(2026, 0).unwrap().month(), 1);
    }

    #[test]
    fn test_navigation_moves_one_month() {
        let jan = MonthRef::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), MonthRef::new(2025, 12).unwrap());
        assert_eq!(jan.next(), MonthRef::new(2026, 2).unwrap());
        assert_eq!(jan.next().prev(), jan);

        // no lower bound: navigating into the past is allowed
        let mut month = jan;
        for _ in 0..24 {
            month = month.prev();
        }
        assert_eq!(month, MonthRef::new(2024, 1).unwrap());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthRef::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthRef::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthRef::new(2026, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_is_available() {
        let today = date(2026, 10, 19);
        assert!(!is_available(date(2026, 10, 18), today));
        assert!(!is_available(date(2025, 12, 31), today));
        assert!(is_available(today, today));
        assert!(is_available(date(2026, 10, 20), today));
        assert!(is_available(date(2030, 1, 1), today));
    }

    #[test]
    fn test_day_predicates() {
        let today = date(2026, 10, 19);
        assert!(is_today(today, today));
        assert!(!is_today(date(2026, 10, 20), today));
        assert!(is_same_day(date(2026, 1, 5), date(2026, 1, 5)));
        assert!(!is_same_day(date(2026, 1, 5), date(2025, 1, 5)));
        assert!(is_same_month(date(2026, 10, 31), MonthRef::new(2026, 10).unwrap()));
        assert!(!is_same_month(date(2025, 10, 31), MonthRef::new(2026, 10).unwrap()));
        assert!(is_weekend(date(2026, 10, 17)));
        assert!(is_weekend(date(2026, 10, 18)));
        assert!(!is_weekend(date(2026, 10, 19)));
    }

    #[test]
    fn test_month_view_flags() {
        let today = date(2026, 10, 19);
        let selected = date(2026, 10, 22);
        let view = CalendarMonthView::build(MonthRef::containing(today), today, Some(selected));

        assert_eq!(view.cells.len(), GRID_CELLS);
        assert_eq!(view.weeks().count(), 6);
        assert_eq!(view.cells.iter().filter(|c| c.is_selected).count(), 1);
        assert_eq!(view.cells.iter().filter(|c| c.in_month).count(), 31);

        let cell = view.cell(today).unwrap();
        assert!(cell.is_today && cell.is_available && !cell.is_weekend);

        let past = view.cell(date(2026, 10, 18)).unwrap();
        assert!(!past.is_available && past.is_weekend);

        let padding = view.cell(date(2026, 9, 28)).unwrap();
        assert!(!padding.in_month);
    }

    #[test]
    fn test_headers_line_up_with_columns() {
        let view = CalendarMonthView::build(MonthRef::new(2026, 2).unwrap(), date(2026, 2, 1), None);
        assert_eq!(view.headers()[0], "Lun");
        assert_eq!(view.headers()[6], "Dom");

        for week in view.weeks() {
            for (column, cell) in week.iter().enumerate() {
                assert_eq!(cell.date.weekday().num_days_from_monday() as usize, column);
                let weekend_column = matches!(view.headers()[column], "Sáb" | "Dom");
                assert_eq!(weekend_column, cell.is_weekend);
            }
        }
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2026, 10, 19)), "lunes, 19 de octubre de 2026");
        assert_eq!(format_long_date(date(2027, 1, 3)), "domingo, 3 de enero de 2027");
        assert_eq!(MonthRef::new(2026, 10).unwrap().title(), "octubre 2026");
    }
}
