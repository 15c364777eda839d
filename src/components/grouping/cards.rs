use super::buckets::MonthBucket;
use super::models::Group;
use crate::utils::time::format_event_span;
use chrono_tz::Tz;

/// Render groups as text cards: the group name as a bold header, then one
/// line per member with its label, title and time span, and the location
/// indented below when known.
pub fn render_cards(groups: &[Group], timezone: &Tz) -> String {
    if groups.is_empty() {
        return format!("{}\n", t!("cards_no_events"));
    }

    let mut message = String::new();

    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            message.push('\n');
        }

        let name = if group.group_name.is_empty() {
            t!("cards_unnamed_group").to_string()
        } else {
            group.group_name.clone()
        };
        message.push_str(&format!("**{}**\n", name));

        for member in &group.members {
            let event = &member.event;
            message.push_str(&format!(
                "• {}: {} ({})\n",
                member.label,
                event.title,
                format_event_span(event, timezone)
            ));
            if let Some(location) = &event.location {
                message.push_str(&format!("  {}\n", location));
            }
        }
    }

    message
}

/// Render month buckets, each under a localized month header
pub fn render_month_buckets(buckets: &[MonthBucket], timezone: &Tz) -> String {
    if buckets.is_empty() {
        return format!("{}\n", t!("cards_no_events"));
    }

    let mut message = String::new();

    for bucket in buckets {
        message.push_str(&format!(
            "## {}\n\n",
            t!(
                "cards_month_header",
                month = month_name(bucket.month),
                year = bucket.year
            )
        ));
        message.push_str(&render_cards(&bucket.groups, timezone));
        message.push('\n');
    }

    message
}

fn month_name(month: u32) -> String {
    match month {
        1 => t!("month_january"),
        2 => t!("month_february"),
        3 => t!("month_march"),
        4 => t!("month_april"),
        5 => t!("month_may"),
        6 => t!("month_june"),
        7 => t!("month_july"),
        8 => t!("month_august"),
        9 => t!("month_september"),
        10 => t!("month_october"),
        11 => t!("month_november"),
        _ => t!("month_december"),
    }
    .to_string()
}
