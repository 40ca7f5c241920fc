use colored::Colorize;

use crate::core::{format_day, local_day};
use crate::features::stats::{render_progress_bar, HabitDetail, HabitStatistics, HabitSummary};
use crate::habits::{CompletionLog, Habit};

fn check_icon(completed: bool) -> colored::ColoredString {
    if completed {
        "[x]".green()
    } else {
        "[ ]".white()
    }
}

fn streak_label(streak: usize) -> String {
    let label = format!("{streak} day streak");
    if streak > 0 {
        label.yellow().to_string()
    } else {
        label.dimmed().to_string()
    }
}

/// Format the habit list as a pretty table
pub fn format_habits_pretty(habits: &[HabitSummary]) -> String {
    if habits.is_empty() {
        return "Habits (0)\n  No habits yet. Add one with `habits add <name>`".to_string();
    }

    let mut output = format!("Habits ({})\n", habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for summary in habits {
        let habit = &summary.habit;
        let mut line = format!(
            "{} {}  {}",
            check_icon(summary.completed_today),
            habit.name.bold(),
            streak_label(summary.streak)
        );

        if let Some(description) = &habit.description {
            line.push_str(&format!("  {}", description.dimmed()));
        }

        line.push_str(&format!("  {}", habit.id.dimmed()));
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a habit with its log history
///
/// `history` is a pre-rendered strip of recent days.
pub fn format_habit_detail_pretty(detail: &HabitDetail, history: &str) -> String {
    let habit = &detail.habit;

    let mut output = format!("{} {}\n", check_icon(detail.completed_today), habit.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));

    if let Some(description) = &habit.description {
        output.push_str(&format!("  {}: {}\n", "Description".dimmed(), description));
    }

    output.push_str(&format!("  {}: {}\n", "Frequency".dimmed(), habit.frequency));
    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        format_day(local_day(&habit.created_at))
    ));
    output.push_str(&format!("  {}: {}\n", "Streak".dimmed(), streak_label(detail.streak)));

    if !history.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Recent".dimmed(), history));
    }

    output.push('\n');
    output.push_str(&format!("History ({})\n", detail.logs.len()));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if detail.logs.is_empty() {
        output.push_str("  No history yet\n");
    }

    for log in &detail.logs {
        let status = if log.completed {
            "Completed".green()
        } else {
            "Not completed".red()
        };
        output.push_str(&format!("  {}  {}\n", format_day(local_day(&log.date)), status));
    }

    output
}

/// Format aggregate statistics with today's progress
pub fn format_statistics_pretty(stats: &HabitStatistics, bar_width: usize) -> String {
    let mut lines = Vec::new();

    lines.push("Statistics".bold().to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Total habits:       {}", stats.total_habits));
    lines.push(format!(
        "  Total completions:  {}",
        stats.total_completions.to_string().green()
    ));
    lines.push(format!("  Completion rate:    {}%", stats.completion_rate));

    let longest = match &stats.longest_streak_habit {
        Some(name) => format!("{} days ({name})", stats.longest_streak),
        None => format!("{} days", stats.longest_streak),
    };
    lines.push(format!("  Longest streak:     {}", longest.yellow()));
    lines.push(String::new());

    lines.push("Today's Progress".bold().to_string());
    lines.push("─".repeat(40));
    lines.push(format!(
        "  {}",
        render_progress_bar(stats.today_completion_rate, bar_width)
    ));
    lines.push(format!(
        "  {} of {} habits completed today",
        stats.completions_today, stats.total_habits
    ));

    if stats.total_habits == 0 {
        lines.push(String::new());
        lines.push("  No habits to analyze yet".dimmed().to_string());
    }

    lines.join("\n")
}

/// Format the result of marking a habit done or not done
pub fn format_log_pretty(habit: &Habit, log: &CompletionLog, streak: usize) -> String {
    let verb = if log.completed {
        "Completed".green()
    } else {
        "Unmarked".yellow()
    };

    format!(
        "{} {} for {}  ({})",
        verb,
        habit.name.bold(),
        format_day(local_day(&log.date)),
        streak_label(streak)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::noon_of;
    use crate::habits::Frequency;
    use chrono::NaiveDate;

    fn make_habit(name: &str) -> Habit {
        Habit {
            id: "habit-id-123".to_string(),
            name: name.to_string(),
            description: None,
            created_at: noon_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            frequency: Frequency::Daily,
        }
    }

    fn make_log(completed: bool) -> CompletionLog {
        CompletionLog {
            id: "log-1".to_string(),
            habit_id: "habit-id-123".to_string(),
            date: noon_of(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            completed,
        }
    }

    #[test]
    fn test_format_habits_pretty_empty_list() {
        let result = format_habits_pretty(&[]);
        assert!(result.contains("Habits (0)"));
        assert!(result.contains("No habits yet"));
    }

    #[test]
    fn test_format_habits_pretty_rows() {
        let mut described = make_habit("Stretch");
        described.description = Some("5 minutes".to_string());
        let habits = vec![
            HabitSummary {
                habit: make_habit("Read"),
                streak: 3,
                completed_today: true,
            },
            HabitSummary {
                habit: described,
                streak: 0,
                completed_today: false,
            },
        ];

        let result = format_habits_pretty(&habits);
        assert!(result.contains("Habits (2)"));
        assert!(result.contains("Read"));
        assert!(result.contains("3 day streak"));
        assert!(result.contains("[x]"));
        assert!(result.contains("[ ]"));
        assert!(result.contains("5 minutes"));
    }

    #[test]
    fn test_format_habit_detail_pretty() {
        let detail = HabitDetail {
            habit: make_habit("Read"),
            streak: 1,
            completed_today: false,
            logs: vec![make_log(true)],
        };

        let result = format_habit_detail_pretty(&detail, "··✓");
        assert!(result.contains("Read"));
        assert!(result.contains("daily"));
        assert!(result.contains("Mon, Jan 15, 2024"));
        assert!(result.contains("Completed"));
        assert!(result.contains("··✓"));
    }

    #[test]
    fn test_format_habit_detail_pretty_no_history() {
        let detail = HabitDetail {
            habit: make_habit("Read"),
            streak: 0,
            completed_today: false,
            logs: vec![],
        };

        let result = format_habit_detail_pretty(&detail, "");
        assert!(result.contains("No history yet"));
        assert!(!result.contains("Recent"));
    }

    #[test]
    fn test_format_statistics_pretty() {
        let stats = HabitStatistics {
            total_habits: 4,
            total_completions: 10,
            completion_rate: 83,
            longest_streak: 5,
            longest_streak_habit: Some("Read".to_string()),
            completions_today: 2,
            today_completion_rate: 50,
        };

        let result = format_statistics_pretty(&stats, 20);
        assert!(result.contains("83%"));
        assert!(result.contains("5 days (Read)"));
        assert!(result.contains("2 of 4 habits completed today"));
        assert!(result.contains("50%"));
        assert!(!result.contains("No habits to analyze"));
    }

    #[test]
    fn test_format_statistics_pretty_empty() {
        let stats = HabitStatistics {
            total_habits: 0,
            total_completions: 0,
            completion_rate: 0,
            longest_streak: 0,
            longest_streak_habit: None,
            completions_today: 0,
            today_completion_rate: 0,
        };

        let result = format_statistics_pretty(&stats, 20);
        assert!(result.contains("No habits to analyze yet"));
    }

    #[test]
    fn test_format_log_pretty() {
        let habit = make_habit("Read");
        assert!(format_log_pretty(&habit, &make_log(true), 2).contains("Completed"));
        assert!(format_log_pretty(&habit, &make_log(false), 0).contains("Unmarked"));
    }
}
