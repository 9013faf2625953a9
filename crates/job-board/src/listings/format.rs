use super::domain::{parse_timestamp, Salary};
use chrono::{DateTime, Utc};

/// Render a pay band as `"$120k - $180k per year"`.
pub fn format_salary(salary: &Salary) -> String {
    format!(
        "{currency}{min} - {currency}{max} {period}",
        currency = salary.currency,
        min = format_amount(salary.min),
        max = format_amount(salary.max),
        period = salary.period,
    )
}

fn format_amount(amount: u64) -> String {
    if amount >= 1000 {
        format!("{}k", amount / 1000 + u64::from(amount % 1000 >= 500))
    } else {
        amount.to_string()
    }
}

/// Coarse "posted N ago" label relative to `now`.
///
/// Dates in the future read as "Today"; unparsable dates read as "Recently".
pub fn time_ago(posted_date: &str, now: DateTime<Utc>) -> String {
    let Some(posted) = parse_timestamp(posted_date) else {
        return "Recently".to_string();
    };

    let days = (now - posted).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => plural(days / 7, "week"),
        _ => plural(days / 30, "month"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s ago")
    } else {
        format!("{count} {unit} ago")
    }
}

/// First `limit` skills plus how many were left out (rendered as a "+N more" badge).
pub fn skill_preview(skills: &[String], limit: usize) -> (Vec<&str>, usize) {
    let shown = skills
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>();
    let hidden = skills.len().saturating_sub(shown.len());
    (shown, hidden)
}
