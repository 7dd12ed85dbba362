mod common;
use common::ymd;

use chrono::{Datelike, Duration};
use rheatlog::core::layout::{
    CANVAS_HEIGHT, CELL_SIZE, CalendarLayout, PITCH, grid_coordinate, offsets_for_weekday,
};
use rheatlog::utils::date::iso_weekday;
use std::collections::HashSet;

#[test]
fn test_offsets_table() {
    assert_eq!(offsets_for_weekday(7), (52, 18, 902));
    assert_eq!(offsets_for_weekday(6), (52, 35, 919));
    for wd in 1..=5 {
        assert_eq!(offsets_for_weekday(wd), (51, 35, 902));
    }
}

#[test]
fn test_full_weeks_depends_only_on_start_weekday() {
    let mut today = ymd(2023, 1, 1);
    for _ in 0..800 {
        let layout = CalendarLayout::new(today).unwrap();
        let (weeks, full, last) = offsets_for_weekday(iso_weekday(layout.start_date));

        assert!(layout.full_weeks == 51 || layout.full_weeks == 52);
        assert_eq!(layout.full_weeks, weeks);
        assert_eq!(layout.full_offset, full);
        assert_eq!(layout.last_offset, last);

        today += Duration::days(1);
    }
}

#[test]
fn test_start_date_is_one_year_before() {
    let layout = CalendarLayout::new(ymd(2024, 3, 15)).unwrap();
    assert_eq!(layout.start_date, ymd(2023, 3, 15));

    // Feb 29 clamps to Feb 28
    let layout = CalendarLayout::new(ymd(2024, 2, 29)).unwrap();
    assert_eq!(layout.start_date, ymd(2023, 2, 28));
}

#[test]
fn test_canvas_width_depends_on_sunday() {
    let mut today = ymd(2025, 5, 26);
    for _ in 0..21 {
        let canvas = CalendarLayout::new(today).unwrap().canvas();
        let expected = if iso_weekday(today) == 7 { 935 } else { 918 };
        assert_eq!(canvas.width, expected, "width for {today}");
        assert_eq!(canvas.height, CANVAS_HEIGHT);
        assert_eq!(canvas.height, 167);
        today += Duration::days(1);
    }
}

#[test]
fn test_grid_coordinates_unique_and_monotonic() {
    let mut today = ymd(2024, 1, 1);
    for _ in 0..30 {
        let layout = CalendarLayout::new(today).unwrap();
        let cells = layout.cells();

        let coords: HashSet<_> = cells.iter().map(|c| c.coord).collect();
        assert_eq!(coords.len(), cells.len(), "duplicate coordinate for {today}");

        for c in &cells {
            assert_eq!(c.coord.row, c.date.weekday().number_from_monday() - 1);

            let next = grid_coordinate(c.date + Duration::days(7), layout.start_date);
            assert_eq!(next.column, c.coord.column + 1);
            assert_eq!(next.row, c.coord.row);
        }

        // drawing order follows the calendar
        for pair in cells.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }

        today += Duration::days(1);
    }
}

#[test]
fn test_window_friday_today() {
    // 2023-03-15 is a Wednesday, 2024-03-15 a Friday
    let layout = CalendarLayout::new(ymd(2024, 3, 15)).unwrap();
    assert_eq!(
        (layout.full_weeks, layout.full_offset, layout.last_offset),
        (51, 35, 902)
    );

    let cells = layout.cells();
    assert_eq!(cells.first().unwrap().date, ymd(2023, 3, 15));
    assert_eq!(cells.last().unwrap().date, ymd(2024, 3, 15));
    assert_eq!(cells.len(), 367);

    // leading partial week sits one pitch left of the first full week
    assert_eq!(cells[0].x, 35 - PITCH);

    let trailing: Vec<_> = cells.iter().filter(|c| c.x == 902).collect();
    assert_eq!(trailing.len(), 5);
    assert_eq!(trailing[0].date, ymd(2024, 3, 11));
}

#[test]
fn test_full_week_columns() {
    let layout = CalendarLayout::new(ymd(2024, 3, 15)).unwrap();
    let first = layout.first_full_monday();
    assert_eq!(first, ymd(2023, 3, 20));

    for c in layout.cells() {
        if c.date >= first && c.date < layout.trailing_monday() {
            let w = ((c.date - first).num_days() / 7) as u32;
            assert_eq!(c.x, w * 17 + layout.full_offset);
        }
        assert_eq!(c.y, layout.row_y(c.coord.row));
        assert_eq!(layout.row_y(c.coord.row) - layout.row_y(0), c.coord.row * 17);
    }
}

#[test]
fn test_sunday_start() {
    // 2024-06-02 is a Sunday, 2025-06-02 a Monday
    let layout = CalendarLayout::new(ymd(2025, 6, 2)).unwrap();
    assert_eq!(
        (layout.full_weeks, layout.full_offset, layout.last_offset),
        (52, 18, 902)
    );

    let cells = layout.cells();
    assert_eq!(cells.len(), 366);
    assert_eq!(cells[0].date, ymd(2024, 6, 2));
    assert_eq!(cells[0].x, 1);

    let last = cells.last().unwrap();
    assert_eq!(last.date, ymd(2025, 6, 2));
    assert_eq!(last.x, 902);
    assert_eq!(last.coord.row, 0);
}

#[test]
fn test_sunday_today_keeps_only_monday_in_trailing_week() {
    // 2024-06-01 is a Saturday, 2025-06-01 a Sunday
    let layout = CalendarLayout::new(ymd(2025, 6, 1)).unwrap();
    assert_eq!(
        (layout.full_weeks, layout.full_offset, layout.last_offset),
        (52, 35, 919)
    );
    assert!(layout.today_is_sunday());
    assert_eq!(layout.canvas().width, 935);

    let trailing: Vec<_> = layout.cells().into_iter().filter(|c| c.x == 919).collect();
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].coord.row, 0);
    assert_eq!(trailing[0].date, ymd(2025, 6, 2));

    for row in 0..7 {
        assert_eq!(layout.trailing_row_included(row), row == 0);
    }
}

#[test]
fn test_trailing_rows_up_to_today() {
    // 2025-06-04 is a Wednesday
    let layout = CalendarLayout::new(ymd(2025, 6, 4)).unwrap();
    let included: Vec<u32> = (0..7).filter(|r| layout.trailing_row_included(*r)).collect();
    assert_eq!(included, vec![0, 1, 2]);
    assert_eq!(layout.cells().last().unwrap().date, ymd(2025, 6, 4));
}

#[test]
fn test_month_labels() {
    let layout = CalendarLayout::new(ymd(2025, 6, 2)).unwrap();
    let labels = layout.month_labels();

    assert_eq!(labels.iter().filter(|l| l.week == 0).count(), 1);
    assert_eq!(labels[0].text, "Jun");
    assert_eq!(labels[0].x, layout.full_offset);

    // week 1 is never labelled
    assert!(labels.iter().all(|l| l.week != 1));

    // 2024-06-17: third full week, day 17 < 20
    assert!(labels.iter().any(|l| l.week == 2 && l.text == "Jun"));

    // 2024-07-01: day 1 < 8
    let jul = labels.iter().find(|l| l.text == "Jul").unwrap();
    assert_eq!(jul.week, 4);
    assert_eq!(jul.x, 4 * 17 + layout.full_offset);

    for l in &labels {
        let dom = l.date.day();
        assert!(l.week == 0 || (l.week == 2 && dom < 20) || (l.week > 2 && dom < 8));
    }
}

#[test]
fn test_leap_span_sunday_today_drops_last_days() {
    // 2023-03-17 is a Friday: 51 full weeks for a 366-day window
    let today = ymd(2024, 3, 17);
    let layout = CalendarLayout::new(today).unwrap();
    assert_eq!(layout.start_date, ymd(2023, 3, 17));
    assert_eq!(
        (layout.full_weeks, layout.full_offset, layout.last_offset),
        (51, 35, 902)
    );
    assert_eq!(layout.trailing_monday(), ymd(2024, 3, 11));
    assert_eq!(layout.canvas().width, 935);

    let cells = layout.cells();
    assert_eq!(cells.len(), 361);

    let last = cells.last().unwrap();
    assert_eq!(last.date, ymd(2024, 3, 11));
    assert_eq!((last.x, last.coord.row), (902, 0));

    // 2024-03-12 ..= today are not drawn
    let mut d = ymd(2024, 3, 12);
    while d <= today {
        assert!(cells.iter().all(|c| c.date != d), "{d} should not be drawn");
        d += Duration::days(1);
    }
}

#[test]
fn test_leap_span_saturday_start_overflows_canvas() {
    // 2023-03-04 is a Saturday, 2024-03-04 a Monday
    let today = ymd(2024, 3, 4);
    let layout = CalendarLayout::new(today).unwrap();
    assert_eq!(layout.start_date, ymd(2023, 3, 4));
    assert_eq!(
        (layout.full_weeks, layout.full_offset, layout.last_offset),
        (52, 35, 919)
    );

    let cells = layout.cells();
    assert_eq!(cells.len(), 367);

    let last = cells.last().unwrap();
    assert_eq!(last.date, today);
    assert_eq!((last.x, last.coord.row), (919, 0));

    let canvas = layout.canvas();
    assert_eq!(canvas.width, 918);
    assert!(last.x + CELL_SIZE > canvas.width);
}
