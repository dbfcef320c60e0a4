use std::fs;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::layout::CalendarTable;
use crate::{date, render_page, schedule_template, write_page};
use crate::{Context, DayStatus, Error, FiscalYear, Language, OpStatus, Schedule};

fn page(ctx: &Context, year: i32) -> Result<String, Error> {
    Ok(render_page(ctx, FiscalYear::new(year)?).into_string())
}

#[test]
fn page_structure() -> Result<(), Error> {
    let ctx = Context::default().with_language(Language::Japanese);
    let ctx = ctx.clone().with_schedule(schedule_template(&ctx, FiscalYear::new(2024)?));
    let html = page(&ctx, 2024)?;

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"ja-JP\">"));
    assert!(html.contains("<title>2024(R6)年度 eLTAX運転日カレンダー</title>"));
    assert!(html.contains("<h1>2024(R6)年度 eLTAX運転日カレンダー</h1>"));
    assert!(html.contains("href=\"style.css\""));
    assert!(html.contains("■ 8:30～24:00"));
    assert_eq!(html.matches("class=\"a-column\"").count(), 2);
    assert_eq!(html.matches("class=\"table-header1-r\">2024(R6)年度<").count(), 2);
    assert!(html.contains("<span class=\"table-header2-r saturday\">土</span>"));
    assert!(html.contains("<span class=\"table-header2-r sunday no-right-border\">日</span>"));

    // One row per week: 27 weeks in each half of fiscal year 2024.
    assert_eq!(html.matches("weekend-sepalator").count(), 54);
    assert_eq!(html.matches("<br>").count(), 54);

    // All months are labeled once.
    for month in 1..=12 {
        assert_eq!(html.matches(&format!(">{month}月</span>")).count(), 1);
    }

    Ok(())
}

/// Class lists of the elements opened by `prefix`, in document order, without the first class.
fn classes<'h>(html: &'h str, prefix: &str) -> Vec<Vec<&'h str>> {
    html.split(prefix)
        .skip(1)
        .map(|rest| rest[..rest.find('"').unwrap_or(0)].split_whitespace().collect())
        .collect()
}

/// Displayed days of both halves of a fiscal year, in document order.
fn displayed_days(fy: FiscalYear) -> Vec<NaiveDate> {
    let schedule = Schedule::new();

    [fy.first_half(), fy.second_half()]
        .into_iter()
        .flat_map(|range| {
            let table = CalendarTable::new(range, fy, &schedule);
            table.days().map(|day| day.date).collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn day_box_classes() -> Result<(), Error> {
    let fy = FiscalYear::new(2024)?;
    let html = page(&Context::default(), 2024)?;
    let days = displayed_days(fy);
    let boxes = classes(&html, "<span class=\"day-box");
    assert_eq!(boxes.len(), days.len());

    let first_half: Vec<_> = days.iter().copied().zip(boxes.iter()).take(189).collect();
    let second_half: Vec<_> = days.iter().copied().zip(boxes.iter()).skip(189).collect();
    assert_eq!(second_half.len(), 189);

    let cell = |date: NaiveDate| {
        first_half
            .iter()
            .find(|(day, _)| *day == date)
            .map(|(_, classes)| classes.as_slice())
            .expect("day should be displayed")
    };

    assert_eq!(cell(date!("2024-04-10")), [] as [&str; 0]);
    assert_eq!(cell(date!("2024-04-07")), ["no-right-border"]);
    assert_eq!(cell(date!("2024-04-24")), ["border-bottom-black"]);
    assert_eq!(cell(date!("2024-04-30")), ["border-right-black", "border-bottom-black"]);
    assert_eq!(cell(date!("2024-05-01")), ["oddmonth"]);
    assert_eq!(cell(date!("2024-06-30")), ["no-right-border", "border-bottom-black"]);
    assert_eq!(
        cell(date!("2024-09-30")),
        ["oddmonth", "border-right-black", "border-bottom-endtable"]
    );
    assert_eq!(cell(date!("2024-10-06")), ["no-right-border", "border-bottom-endtable"]);

    let (last_monday, last_monday_classes) = &second_half[182];
    assert_eq!(*last_monday, date!("2025-03-31"));
    assert_eq!(
        **last_monday_classes,
        ["oddmonth", "border-right-black", "border-bottom-endtable"]
    );

    let (last_sunday, last_sunday_classes) = &second_half[188];
    assert_eq!(*last_sunday, date!("2025-04-06"));
    assert_eq!(
        **last_sunday_classes,
        ["no-right-border", "border-bottom-endtable", "box-outyear"]
    );

    for half in [&first_half, &second_half] {
        for (i, (date, classes)) in half.iter().enumerate() {
            let has = |class: &str| classes.contains(&class);
            let is_sunday = date.weekday() == Weekday::Sun;
            assert_eq!(has("oddmonth"), date.month() % 2 == 1, "{date}");
            assert_eq!(has("no-right-border"), is_sunday, "{date}");
            assert!(!(is_sunday && has("border-right-black")), "{date}");
            assert_eq!(has("border-bottom-endtable"), i >= half.len() - 7, "{date}");
            assert!(!(has("border-bottom-endtable") && has("border-bottom-black")), "{date}");
        }
    }

    Ok(())
}

#[test]
fn month_cell_classes() -> Result<(), Error> {
    let fy = FiscalYear::new(2024)?;
    let html = page(&Context::default(), 2024)?;
    let months = classes(&html, "<span class=\"month");

    let schedule = Schedule::new();
    let mondays: Vec<_> = [fy.first_half(), fy.second_half()]
        .into_iter()
        .flat_map(|range| {
            let table = CalendarTable::new(range, fy, &schedule);
            table.weeks.iter().map(|week| week.days[0].date).collect::<Vec<_>>()
        })
        .collect();

    assert_eq!(months.len(), mondays.len());
    let cell = |date: NaiveDate| {
        let pos = mondays.iter().position(|monday| *monday == date);
        months[pos.expect("week should be displayed")].as_slice()
    };

    assert_eq!(cell(date!("2024-04-01")), [] as [&str; 0]);
    assert_eq!(cell(date!("2024-04-29")), ["border-bottom-black"]);
    assert_eq!(cell(date!("2024-05-06")), ["oddmonth"]);
    assert_eq!(cell(date!("2024-09-30")), ["border-bottom-endtable", "oddmonth"]);
    assert_eq!(
        months.last().map(Vec::as_slice),
        Some(&["border-bottom-endtable", "oddmonth"][..])
    );
    Ok(())
}

#[test]
fn era_change_year() -> Result<(), Error> {
    let ctx = Context::default().with_language(Language::Japanese);
    let html = page(&ctx, 2019)?;
    assert!(html.contains("<title>2019(R1)年度 eLTAX運転日カレンダー</title>"));
    assert!(!html.contains("R0"));
    Ok(())
}

#[test]
fn holiday_cells() -> Result<(), Error> {
    let schedule: Schedule = [
        (date!("2024-04-28"), DayStatus::new(OpStatus::Closed)),
        (date!("2024-04-29"), DayStatus::holiday("Showa Day")),
        (date!("2024-05-03"), DayStatus::holiday("憲法記念日")),
        (date!("2024-05-04"), DayStatus::holiday("<Greenery>")),
    ]
    .into_iter()
    .collect();

    let ctx = Context::default().with_schedule(schedule);
    let html = page(&ctx, 2024)?;

    // Closed days show a text unless a holiday name is displayed.
    assert_eq!(html.matches("<span class=\"rest-box\">Closed</span>").count(), 1);
    assert_eq!(html.matches("<span class=\"rest-box\"></span>").count(), 3);

    assert!(html.contains("<span class=\"holiday sunday smallfont\">Showa Day</span>"));
    assert!(html.contains("<span class=\"holiday sunday\">憲法記念日</span>"));
    assert!(html.contains("&lt;Greenery&gt;"));
    assert!(!html.contains("<Greenery>"));

    // Holidays are marked as sundays, except on saturdays.
    assert!(html.contains("<span class=\"day-label sunday\">29</span>"));
    assert!(html.contains("<span class=\"day-label sunday\">3</span>"));
    assert!(html.contains("<span class=\"day-label saturday\">4</span>"));
    Ok(())
}

#[test]
fn operating_markers() -> Result<(), Error> {
    let schedule: Schedule = [
        (date!("2024-04-01"), DayStatus::new(OpStatus::FullService)),
        (date!("2024-04-02"), DayStatus::new(OpStatus::LimitedService)),
        (date!("2024-04-03"), DayStatus::new(OpStatus::LimitedService)),
    ]
    .into_iter()
    .collect();

    let ctx = Context::default().with_schedule(schedule);
    let html = page(&ctx, 2024)?;

    assert_eq!(html.matches("<span class=\"full-work-box\"></span>").count(), 1);
    assert_eq!(html.matches("<span class=\"work-box\"></span>").count(), 2);
    assert_eq!(html.matches("rest-box").count(), 0);
    Ok(())
}

#[test]
fn missing_schedule_renders_empty_cells() -> Result<(), Error> {
    let html = page(&Context::default(), 2024)?;

    // 365 days of the fiscal year, the first days of October and September 30 are displayed in
    // both halves.
    assert_eq!(html.matches("<span class=\"op-box\"></span>").count(), 372);
    assert!(!html.contains("work-box"));
    assert!(!html.contains("class=\"holiday"));
    Ok(())
}

#[test]
fn padding_days_are_shaded() -> Result<(), Error> {
    let html = page(&Context::default(), 2025)?;

    // 2025-03-31 before the first half, 2026-04-01 to 2026-04-05 after the second half.
    assert_eq!(html.matches("box-outyear").count(), 6);
    assert!(html.contains("<span class=\"day-label outyear\">31</span>"));
    assert!(html.contains("<span class=\"day-label sunday outyear\">5</span>"));
    assert!(html.contains("<span class=\"day-label saturday outyear\">4</span>"));
    Ok(())
}

#[test]
fn english_labels() -> Result<(), Error> {
    let html = page(&Context::default(), 2024)?;

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains("<title>FY2024 (R6) eLTAX operating calendar</title>"));
    assert!(html.contains(">Apr</span>"));
    Ok(())
}

#[test]
fn write_page_to_directory() -> Result<(), Error> {
    let dir = std::env::temp_dir().join(format!("eltax-calendar-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create test directory");

    let path = write_page(&Context::default(), FiscalYear::new(2024)?, &dir)?;
    assert_eq!(path, dir.join("20240401-20250331.html"));

    let html = fs::read_to_string(&path).expect("page should have been written");
    assert!(html.contains("eLTAX operating calendar"));

    fs::remove_dir_all(&dir).expect("failed to clean test directory");

    let missing_dir = dir.join("missing");
    let res = write_page(&Context::default(), FiscalYear::new(2024)?, &missing_dir);
    assert!(matches!(res, Err(Error::Io { .. })));
    Ok(())
}
