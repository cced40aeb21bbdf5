use super::{FeedEntry, Headline, NewsSummary};
use chrono::{DateTime, TimeDelta, Utc};

/// Fixed-width, so comparing formatted dates as strings orders them in time.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Keep entries dated within `days` of `now`, newest first.
///
/// An entry's date is its published time, falling back to its updated time.
/// Entries with neither are dropped. Ties on the formatted date keep feed order.
pub fn filter_recent(entries: Vec<FeedEntry>, days: u32, now: DateTime<Utc>) -> NewsSummary {
    // None when the window reaches past the earliest representable time.
    let cutoff = now.checked_sub_signed(TimeDelta::days(i64::from(days)));

    let mut headlines: Vec<Headline> = entries
        .into_iter()
        .filter_map(|entry| {
            let timestamp = entry.published.or(entry.updated)?;
            if cutoff.is_some_and(|cutoff| timestamp < cutoff) {
                return None;
            }

            Some(Headline {
                title: entry.title,
                date: timestamp.format(DATE_FORMAT).to_string(),
                link: entry.link.unwrap_or_default(),
            })
        })
        .collect();

    headlines.sort_by(|a, b| b.date.cmp(&a.date));

    NewsSummary::from_headlines(headlines)
}
