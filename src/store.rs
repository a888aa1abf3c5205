use crate::models::{DayPoint, Habit, Reminder, TODAY_SLOT, WEEK_DAYS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Authoritative in-memory collection of habits and reminders.
///
/// Every operation is a single synchronous transition: it either fully
/// applies or rejects before mutating anything. Rejections are reported
/// through the return value instead of being raised.
pub struct HabitStore {
    habits: Vec<Habit>,
    reminders: Vec<Reminder>,
    rng: SmallRng,
}

impl HabitStore {
    pub fn new(color_seed: u64) -> Self {
        Self {
            habits: Vec::new(),
            reminders: Vec::new(),
            rng: SmallRng::seed_from_u64(color_seed),
        }
    }

    /// The demo data set the dashboard boots with. State is transient, so a
    /// fresh server always starts from these four habits and two reminders.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new(0x5eed);
        store.habits = vec![
            sample_habit(1, "Sleep", "moon", 8.0, "hours", "#8B5CF6", [7.5, 8.0, 7.0, 8.5, 6.5, 9.0, 8.5], 5),
            sample_habit(2, "Water", "droplet", 8.0, "glasses", "#0EA5E9", [6.0, 7.0, 8.0, 8.0, 6.0, 5.0, 7.0], 3),
            sample_habit(3, "Screen Time", "monitor", 2.0, "hours", "#F43F5E", [3.5, 2.5, 2.0, 1.5, 3.0, 4.0, 3.0], 2),
            sample_habit(4, "Exercise", "activity", 30.0, "minutes", "#10B981", [45.0, 0.0, 30.0, 60.0, 15.0, 0.0, 45.0], 1),
        ];
        store.reminders = vec![
            Reminder {
                id: 1,
                habit_id: 1,
                message: "Don't forget to log your sleep!".to_string(),
                time: "09:00 AM".to_string(),
            },
            Reminder {
                id: 2,
                habit_id: 2,
                message: "Remember to drink water!".to_string(),
                time: "11:30 AM".to_string(),
            },
        ];
        store
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn habit(&self, id: u64) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Creates a habit with a fresh id, a zeroed week and a generated color.
    /// Returns `None` without mutating anything when the name is blank.
    /// A non-finite or non-positive target falls back to 1, a blank unit to
    /// "times".
    pub fn add_habit(&mut self, name: &str, target: f64, unit: &str) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let target = if target.is_finite() && target > 0.0 { target } else { 1.0 };
        let unit = unit.trim();
        let unit = if unit.is_empty() { "times" } else { unit };
        let id = next_id(self.habits.iter().map(|habit| habit.id));
        let color = format!("#{:06x}", self.rng.gen_range(0u32..0x100_0000));

        self.habits.push(Habit {
            id,
            name: name.to_string(),
            icon: "check".to_string(),
            target,
            unit: unit.to_string(),
            color,
            data: empty_week(),
            streak: 0,
        });
        self.habits.last()
    }

    /// Writes `value` into today's slot and updates the streak: one more on a
    /// qualifying log, back to zero on a miss. The streak is a counter bumped
    /// per logging action, not a recount of the stored week.
    pub fn log_habit(&mut self, id: u64, value: f64) -> Option<&Habit> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        habit.data[TODAY_SLOT].value = value;
        if value >= habit.target {
            habit.streak += 1;
        } else {
            habit.streak = 0;
        }
        Some(habit)
    }

    /// Removes the habit and cascades to every reminder that references it.
    pub fn delete_habit(&mut self, id: u64) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return false;
        }
        self.reminders.retain(|reminder| reminder.habit_id != id);
        true
    }

    /// Returns `None` when the message is blank or the habit does not exist;
    /// a reminder is meaningless without its habit.
    pub fn add_reminder(&mut self, habit_id: u64, message: &str, time: &str) -> Option<&Reminder> {
        let message = message.trim();
        if message.is_empty() || self.habit(habit_id).is_none() {
            return None;
        }

        let id = next_id(self.reminders.iter().map(|reminder| reminder.id));
        self.reminders.push(Reminder {
            id,
            habit_id,
            message: message.to_string(),
            time: time.to_string(),
        });
        self.reminders.last()
    }

    pub fn delete_reminder(&mut self, id: u64) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|reminder| reminder.id != id);
        self.reminders.len() != before
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

fn empty_week() -> Vec<DayPoint> {
    WEEK_DAYS
        .iter()
        .map(|day| DayPoint {
            day: (*day).to_string(),
            value: 0.0,
        })
        .collect()
}

fn sample_habit(
    id: u64,
    name: &str,
    icon: &str,
    target: f64,
    unit: &str,
    color: &str,
    values: [f64; 7],
    streak: u32,
) -> Habit {
    Habit {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        target,
        unit: unit.to_string(),
        color: color.to_string(),
        data: WEEK_DAYS
            .iter()
            .zip(values)
            .map(|(day, value)| DayPoint {
                day: (*day).to_string(),
                value,
            })
            .collect(),
        streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_habit_rejects_blank_name() {
        let mut store = HabitStore::new(1);
        assert!(store.add_habit("   ", 5.0, "pages").is_none());
        assert!(store.habits().is_empty());
    }

    #[test]
    fn add_habit_starts_with_zeroed_week() {
        let mut store = HabitStore::new(1);
        let habit = store.add_habit("Read", 20.0, "pages").expect("habit created");
        assert_eq!(habit.id, 1);
        assert_eq!(habit.target, 20.0);
        assert_eq!(habit.unit, "pages");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.data.len(), 7);
        assert!(habit.data.iter().all(|day| day.value == 0.0));
        let days: Vec<&str> = habit.data.iter().map(|day| day.day.as_str()).collect();
        assert_eq!(days, WEEK_DAYS);
    }

    #[test]
    fn add_habit_defaults_target_and_unit() {
        let mut store = HabitStore::new(1);
        let habit = store.add_habit("Stretch", -3.0, "  ").expect("habit created");
        assert_eq!(habit.target, 1.0);
        assert_eq!(habit.unit, "times");

        let habit = store.add_habit("Meditate", f64::NAN, "minutes").expect("habit created");
        assert_eq!(habit.target, 1.0);
    }

    #[test]
    fn habit_colors_look_like_hex() {
        let mut store = HabitStore::new(7);
        let color = store.add_habit("Read", 1.0, "").expect("habit created").color.clone();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_stay_unique_after_deletions() {
        let mut store = HabitStore::new(1);
        assert!(store.add_habit("A", 1.0, "").is_some());
        assert!(store.add_habit("B", 1.0, "").is_some());
        let c = store.add_habit("C", 1.0, "").expect("habit created").id;
        assert_eq!(c, 3);

        assert!(store.delete_habit(1));
        assert!(store.delete_habit(2));
        let d = store.add_habit("D", 1.0, "").expect("habit created").id;
        assert_eq!(d, 4);
    }

    #[test]
    fn deleting_the_highest_id_hands_it_to_the_next_habit() {
        let mut store = HabitStore::new(1);
        assert!(store.add_habit("A", 1.0, "").is_some());
        let b = store.add_habit("B", 1.0, "").expect("habit created").id;
        assert_eq!(b, 2);

        // max(existing, 0) + 1 over live habits only: ids are non-decreasing,
        // not strictly increasing, across deletions.
        assert!(store.delete_habit(b));
        let c = store.add_habit("C", 1.0, "").expect("habit created").id;
        assert_eq!(c, b);
    }

    #[test]
    fn logging_writes_todays_slot_and_extends_streak() {
        let mut store = HabitStore::new(1);
        let id = store.add_habit("Read", 20.0, "pages").expect("habit created").id;

        let habit = store.log_habit(id, 25.0).expect("habit logged");
        assert_eq!(habit.data[TODAY_SLOT].value, 25.0);
        assert_eq!(habit.streak, 1);

        let habit = store.log_habit(id, 20.0).expect("habit logged");
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn logging_below_target_resets_streak() {
        let mut store = HabitStore::new(1);
        let id = store.add_habit("Read", 20.0, "pages").expect("habit created").id;
        assert!(store.log_habit(id, 25.0).is_some());
        assert!(store.log_habit(id, 30.0).is_some());

        let habit = store.log_habit(id, 5.0).expect("habit logged");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.data[TODAY_SLOT].value, 5.0);
    }

    #[test]
    fn logging_unknown_habit_is_a_noop() {
        let mut store = HabitStore::with_sample_data();
        assert!(store.log_habit(999, 1.0).is_none());
    }

    #[test]
    fn deleting_a_habit_cascades_its_reminders() {
        let mut store = HabitStore::with_sample_data();
        assert_eq!(store.reminders().len(), 2);

        assert!(store.delete_habit(1));
        assert!(store.habit(1).is_none());
        assert_eq!(store.reminders().len(), 1);
        assert_eq!(store.reminders()[0].habit_id, 2);
    }

    #[test]
    fn deleting_unknown_records_is_a_noop() {
        let mut store = HabitStore::with_sample_data();
        assert!(!store.delete_habit(999));
        assert!(!store.delete_reminder(999));
        assert_eq!(store.habits().len(), 4);
        assert_eq!(store.reminders().len(), 2);
    }

    #[test]
    fn add_reminder_requires_message_and_habit() {
        let mut store = HabitStore::with_sample_data();
        assert!(store.add_reminder(1, "  ", "08:00 AM").is_none());
        assert!(store.add_reminder(999, "Go!", "08:00 AM").is_none());
        assert_eq!(store.reminders().len(), 2);

        let reminder = store
            .add_reminder(3, "Put the phone down", "09:30 PM")
            .expect("reminder created");
        assert_eq!(reminder.id, 3);
        assert_eq!(reminder.habit_id, 3);
    }

    #[test]
    fn delete_reminder_leaves_others_alone() {
        let mut store = HabitStore::with_sample_data();
        assert!(store.delete_reminder(1));
        assert_eq!(store.reminders().len(), 1);
        assert_eq!(store.reminders()[0].id, 2);
    }
}
