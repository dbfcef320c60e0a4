//! HTML rendering of calendar pages.
//!
//! Pages only carry structure and class names, their look is defined by the `style.css`
//! published next to them.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::fiscal_year::FiscalYear;
use crate::holidays::HolidayCalendar;
use crate::layout::{BottomBorder, CalendarTable, DayCell, MonthCell, RightBorder};
use crate::localization::{Labels, Language};
use crate::status::OpStatus;

/// Holiday names longer than this are displayed with a smaller font.
const SMALL_FONT_THRESHOLD: usize = 5;

/// Render the calendar page of a fiscal year: its first half (April to September) next to its
/// second half (October to March).
///
/// ```
/// use eltax_calendar::{render_page, Context, FiscalYear, Language};
///
/// let ctx = Context::default().with_language(Language::Japanese);
/// let page = render_page(&ctx, FiscalYear::new(2024).unwrap()).into_string();
///
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<title>2024(R6)年度 eLTAX運転日カレンダー</title>"));
/// ```
pub fn render_page<H: HolidayCalendar>(ctx: &Context<H>, fiscal_year: FiscalYear) -> Markup {
    let labels = ctx.language.labels();
    let title = format!("{} {}", ctx.language.fiscal_year_label(fiscal_year), labels.calendar_name);

    html! {
        (DOCTYPE)
        html lang=(labels.html_lang) {
            head {
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
                title { (title) }
                link href="style.css" rel="stylesheet" type="text/css";
            }
            body {
                h1 { (title) }
                (render_legend(labels))
                div.col2-table {
                    (render_table(ctx, fiscal_year, fiscal_year.first_half()))
                    (render_table(ctx, fiscal_year, fiscal_year.second_half()))
                }
            }
        }
    }
}

/// Render the calendar page of a fiscal year into `dir`, returning the path of the written file.
pub fn write_page<H: HolidayCalendar>(
    ctx: &Context<H>,
    fiscal_year: FiscalYear,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(fiscal_year.page_file_name());
    let page = render_page(ctx, fiscal_year);

    fs::write(&path, page.into_string())
        .map_err(|source| Error::Io { path: path.clone(), source })?;

    Ok(path)
}

fn render_legend(labels: &Labels) -> Markup {
    html! {
        div.legend {
            (labels.legend)
            span.full-work { "■ " (labels.full_service_hours) }
            (PreEscaped("&ensp;"))
            span.work { "■ " (labels.limited_service_hours) }
            (PreEscaped("&ensp;"))
            span.rest { "■ " (labels.closed) }
        }
    }
}

fn render_table<H: HolidayCalendar>(
    ctx: &Context<H>,
    fiscal_year: FiscalYear,
    range: Range<NaiveDate>,
) -> Markup {
    let table = CalendarTable::new(range, fiscal_year, &ctx.schedule);

    html! {
        div.a-column {
            (render_header(ctx.language, fiscal_year))
            @for week in &table.weeks {
                (render_month(ctx.language, &week.month))
                @for day in &week.days {
                    (render_day(ctx.language.labels(), day))
                }
                // The class name matches the published style.css
                span.weekend-sepalator {}
                br;
            }
        }
    }
}

fn render_header(language: Language, fiscal_year: FiscalYear) -> Markup {
    let weekdays = language.labels().weekdays;

    html! {
        div.table-header {
            div.table-header1 {
                span.table-header-l {}
                span.table-header1-r { (language.fiscal_year_label(fiscal_year)) }
            }
            div.table-header2 {
                span.table-header-l {}
                @for (i, weekday) in weekdays.iter().enumerate() {
                    span.table-header2-r.saturday[i == 5].sunday[i == 6].no-right-border[i == 6] {
                        (weekday)
                    }
                }
            }
        }
    }
}

fn render_month(language: Language, cell: &MonthCell) -> Markup {
    html! {
        span.month
            .border-bottom-endtable[cell.bottom == BottomBorder::EndOfTable]
            .border-bottom-black[cell.bottom == BottomBorder::MonthEnd]
            .oddmonth[cell.is_odd_month()]
        {
            @if cell.show_label {
                (language.month_label(cell.month))
            }
        }
    }
}

fn render_day(labels: &Labels, cell: &DayCell) -> Markup {
    let holiday = cell.holiday();

    html! {
        span.day-box
            .oddmonth[cell.is_odd_month()]
            .no-right-border[cell.right == RightBorder::None]
            .border-right-black[cell.right == RightBorder::MonthEnd]
            .border-bottom-endtable[cell.bottom == BottomBorder::EndOfTable]
            .border-bottom-black[cell.bottom == BottomBorder::MonthEnd]
            .box-outyear[cell.out_of_scope]
        {
            span.day-label
                .saturday[cell.is_saturday()]
                .sunday[cell.is_sunday_like()]
                .outyear[cell.out_of_scope]
            {
                (cell.date.day())
            }

            @if !cell.out_of_scope {
                span.op-box {
                    @match cell.op() {
                        Some(OpStatus::FullService) => { span.full-work-box {} }
                        Some(OpStatus::LimitedService) => { span.work-box {} }
                        Some(OpStatus::Closed) => {
                            span.rest-box {
                                @if holiday.is_none() {
                                    (labels.closed)
                                }
                            }
                        }
                        None => {}
                    }
                }
            }

            @if let Some(holiday) = holiday {
                span.holiday.sunday
                    .smallfont[holiday.chars().count() > SMALL_FONT_THRESHOLD]
                    .outyear[cell.out_of_scope]
                {
                    (holiday)
                }
            }
        }
    }
}
