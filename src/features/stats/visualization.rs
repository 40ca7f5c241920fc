//! Terminal visualization for statistics.
//!
//! Progress bars, per-habit day strips and summary boxes.

use chrono::{Days, NaiveDate};

use crate::habits::LogIndex;

const FULL_BLOCK: char = '█';
const EMPTY_BLOCK: char = '░';

/// Render a progress bar for a 0-100 percentage.
///
/// # Arguments
///
/// * `percent` - Percentage to show, clamped to 100
/// * `width` - Width of the bar portion
pub fn render_progress_bar(percent: u32, width: usize) -> String {
    let percent = percent.min(100);
    let filled = width * percent as usize / 100;
    let empty = width - filled;

    format!(
        "[{}{}] {percent}%",
        FULL_BLOCK.to_string().repeat(filled),
        EMPTY_BLOCK.to_string().repeat(empty)
    )
}

/// Longest recent-days strip `render_history` draws.
pub const MAX_HISTORY_DAYS: usize = 3650;

/// Render the last `days` local days of one habit, oldest first.
///
/// `✓` marks a completed day, `✗` a day logged as not done, `·` a day with
/// no log. `days` is capped at [`MAX_HISTORY_DAYS`], and days before the
/// earliest representable date are left out.
pub fn render_history(index: &LogIndex<'_>, habit_id: &str, today: NaiveDate, days: usize) -> String {
    (0..days.min(MAX_HISTORY_DAYS))
        .rev()
        .filter_map(|back| {
            let back = u64::try_from(back).ok()?;
            today.checked_sub_days(Days::new(back))
        })
        .map(|day| {
            if index.is_completed_on(habit_id, day) {
                '✓'
            } else if index.log_on(habit_id, day).is_some() {
                '✗'
            } else {
                '·'
            }
        })
        .collect()
}

/// Render a summary box with key metrics.
///
/// # Arguments
///
/// * `title` - Box title
/// * `items` - Vec of (label, value) pairs
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3; // " : "
    let title_len = title.chars().count();
    let box_width = content_width.max(title_len) + 4;

    let mut lines = Vec::new();

    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - title_len) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - title_len)
    ));

    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item_str = format!("{label:>max_label_len$} : {value}");
        let padding = box_width - item_str.chars().count();
        lines.push(format!("│ {}{} │", item_str, " ".repeat(padding - 2)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));

    lines.join("\n")
}
