//! Project-plan XML export: one `<Task>` element per scheduled task with a
//! sequential numeric UID, start/finish timestamps built from the calendar's
//! shift window, and an ISO-8601-style `PT{days}D` duration.

use super::{InterchangeError, InterchangeResult};
use crate::calendar::WorkCalendar;
use crate::schedule::ScheduledTask;
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

/// A task element read back from an exported plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTask {
    pub uid: u32,
    pub name: String,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
    pub duration_days: f64,
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn xml_unescape(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Render the plan as an XML string.
pub fn project_plan_xml(
    project_name: &str,
    scheduled: &[ScheduledTask],
    calendar: &WorkCalendar,
) -> String {
    let shift_start = calendar.shift_start().format("%H:%M:%S");
    let shift_end = calendar.shift_end().format("%H:%M:%S");

    let mut xml = String::from("<?xml version=\"1.0\"?><Project>");
    xml.push_str(&format!("<Name>{}</Name><Tasks>", xml_escape(project_name)));
    for (i, s) in scheduled.iter().enumerate() {
        xml.push_str(&format!(
            "<Task><UID>{}</UID><Name>{}</Name><Start>{}T{}</Start><Finish>{}T{}</Finish><Duration>PT{}D</Duration></Task>",
            i + 1,
            xml_escape(&s.task.name),
            s.start.format("%Y-%m-%d"),
            shift_start,
            s.finish.format("%Y-%m-%d"),
            shift_end,
            s.task.duration_days,
        ));
    }
    xml.push_str("</Tasks></Project>");
    xml
}

pub fn save_project_plan_xml<P: AsRef<Path>>(
    path: P,
    project_name: &str,
    scheduled: &[ScheduledTask],
    calendar: &WorkCalendar,
) -> InterchangeResult<()> {
    fs::write(path, project_plan_xml(project_name, scheduled, calendar))?;
    Ok(())
}

fn tag_text<'a>(fragment: &'a str, tag: &str) -> InterchangeResult<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = fragment
        .find(&open)
        .ok_or_else(|| InterchangeError::InvalidData(format!("missing <{tag}> element")))?
        + open.len();
    let end = fragment[start..]
        .find(&close)
        .ok_or_else(|| InterchangeError::InvalidData(format!("unterminated <{tag}> element")))?;
    Ok(&fragment[start..start + end])
}

fn parse_timestamp(raw: &str) -> InterchangeResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| InterchangeError::InvalidData(format!("invalid timestamp '{raw}': {e}")))
}

fn parse_duration_days(raw: &str) -> InterchangeResult<f64> {
    raw.strip_prefix("PT")
        .and_then(|rest| rest.strip_suffix('D'))
        .and_then(|days| days.parse::<f64>().ok())
        .ok_or_else(|| InterchangeError::InvalidData(format!("invalid duration '{raw}'")))
}

/// Read the task elements back out of an exported plan. Only the fields the
/// export writes are recovered; this is the inverse needed for round-trip
/// checks, not a general XML parser.
pub fn parse_project_plan_xml(xml: &str) -> InterchangeResult<Vec<ExportedTask>> {
    let mut tasks = Vec::new();
    for fragment in xml.split("<Task>").skip(1) {
        let fragment = fragment
            .split("</Task>")
            .next()
            .ok_or_else(|| InterchangeError::InvalidData("unterminated <Task> element".into()))?;
        tasks.push(ExportedTask {
            uid: tag_text(fragment, "UID")?.parse::<u32>().map_err(|e| {
                InterchangeError::InvalidData(format!("invalid UID: {e}"))
            })?,
            name: xml_unescape(tag_text(fragment, "Name")?),
            start: parse_timestamp(tag_text(fragment, "Start")?)?,
            finish: parse_timestamp(tag_text(fragment, "Finish")?)?,
            duration_days: parse_duration_days(tag_text(fragment, "Duration")?)?,
        });
    }
    Ok(tasks)
}
