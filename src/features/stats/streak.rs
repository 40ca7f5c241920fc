//! Consecutive-day streak detection.

use crate::core::local_day;
use crate::habits::{CompletionLog, LogIndex, Snapshot};

/// Current streak of `habit_id` in `snapshot`.
///
/// Counts consecutive local days with a completed log, ending at the most
/// recent completed day. That day does not have to be today: a habit last
/// completed a week ago still reports the run that ended then.
///
/// Returns 0 for an unknown habit or one without completed logs.
#[must_use]
pub fn streak_of(snapshot: &Snapshot, habit_id: &str) -> usize {
    if snapshot.habit(habit_id).is_none() {
        return 0;
    }

    let index = LogIndex::new(&snapshot.logs);
    streak_from_logs(index.completed_for(habit_id))
}

/// Streak over one habit's completed logs, in any order.
#[must_use]
pub fn streak_from_logs(mut completed: Vec<&CompletionLog>) -> usize {
    completed.sort_by(|a, b| b.date.cmp(&a.date));

    let Some((latest, rest)) = completed.split_first() else {
        return 0;
    };

    let mut streak = 1;
    let mut anchor = local_day(&latest.date);

    for log in rest {
        let day = local_day(&log.date);
        if day == anchor {
            // Same-day duplicate.
            continue;
        }
        if anchor.pred_opt() == Some(day) {
            streak += 1;
            anchor = day;
        } else {
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{noon_of, start_of_day};
    use crate::habits::{Frequency, Habit};
    use chrono::{Duration, NaiveDate};

    fn d0() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("Habit {id}"),
            description: None,
            created_at: start_of_day(d0() - Duration::days(30)),
            frequency: Frequency::Daily,
        }
    }

    fn done(habit_id: &str, days_back: i64) -> CompletionLog {
        log(habit_id, days_back, true)
    }

    fn log(habit_id: &str, days_back: i64, completed: bool) -> CompletionLog {
        CompletionLog {
            id: format!("{habit_id}-{days_back}-{completed}"),
            habit_id: habit_id.to_string(),
            date: noon_of(d0() - Duration::days(days_back)),
            completed,
        }
    }

    fn snapshot(logs: Vec<CompletionLog>) -> Snapshot {
        Snapshot::new(vec![habit("a")], logs)
    }

    #[test]
    fn test_unknown_habit_is_zero() {
        let snap = snapshot(vec![done("ghost", 0)]);
        assert_eq!(streak_of(&snap, "ghost"), 0);
    }

    #[test]
    fn test_no_completed_logs_is_zero() {
        let snap = snapshot(vec![log("a", 0, false), log("a", 1, false)]);
        assert_eq!(streak_of(&snap, "a"), 0);
        assert_eq!(streak_of(&snapshot(vec![]), "a"), 0);
    }

    #[test]
    fn test_three_consecutive_days() {
        let snap = snapshot(vec![done("a", 0), done("a", 1), done("a", 2), done("a", 4)]);
        assert_eq!(streak_of(&snap, "a"), 3);
    }

    #[test]
    fn test_gap_breaks_streak() {
        let snap = snapshot(vec![done("a", 0), done("a", 2)]);
        assert_eq!(streak_of(&snap, "a"), 1);
    }

    #[test]
    fn test_same_day_duplicates_count_once() {
        let mut dup = done("a", 0);
        dup.id = "dup".to_string();
        dup.date = start_of_day(d0()) + Duration::hours(1);
        let snap = snapshot(vec![done("a", 0), dup, done("a", 1)]);
        assert_eq!(streak_of(&snap, "a"), 2);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let snap = snapshot(vec![done("a", 2), done("a", 0), done("a", 1)]);
        assert_eq!(streak_of(&snap, "a"), 3);
    }

    #[test]
    fn test_incomplete_logs_are_ignored() {
        // An unchecked day between two completed days is still a gap.
        let snap = snapshot(vec![done("a", 0), log("a", 1, false), done("a", 2)]);
        assert_eq!(streak_of(&snap, "a"), 1);
    }

    #[test]
    fn test_streak_anchors_on_latest_completion_not_today() {
        let snap = snapshot(vec![done("a", 10), done("a", 11), done("a", 12)]);
        assert_eq!(streak_of(&snap, "a"), 3);
    }

    #[test]
    fn test_other_habits_do_not_contribute() {
        let snap = Snapshot::new(
            vec![habit("a"), habit("b")],
            vec![done("a", 0), done("b", 1), done("a", 2)],
        );
        assert_eq!(streak_of(&snap, "a"), 1);
        assert_eq!(streak_of(&snap, "b"), 1);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let logs = vec![
            CompletionLog {
                id: "1".to_string(),
                habit_id: "a".to_string(),
                date: noon_of(first),
                completed: true,
            },
            CompletionLog {
                id: "2".to_string(),
                habit_id: "a".to_string(),
                date: noon_of(first - Duration::days(1)),
                completed: true,
            },
        ];
        assert_eq!(streak_from_logs(logs.iter().collect()), 2);
    }
}
