use crate::models::{DailyCompletionPoint, Habit, HabitPerformancePoint, StatsResponse, WEEK_DAYS};
use crate::store::HabitStore;

/// Percentage of the fixed week (rounded) where the logged value met the
/// target. Always 0..=100.
pub fn performance(habit: &Habit) -> u8 {
    let on_target = habit
        .data
        .iter()
        .filter(|day| day.value >= habit.target)
        .count();
    (on_target as f64 / habit.data.len() as f64 * 100.0).round() as u8
}

pub fn build_stats(store: &HabitStore) -> StatsResponse {
    let habits: Vec<HabitPerformancePoint> = store
        .habits()
        .iter()
        .map(|habit| HabitPerformancePoint {
            id: habit.id,
            name: habit.name.clone(),
            color: habit.color.clone(),
            streak: habit.streak,
            performance: performance(habit),
        })
        .collect();

    let total_streaks = store.habits().iter().map(|habit| habit.streak).sum();

    // With no habits the average is undefined; report it as absent rather
    // than dividing by zero.
    let average_performance = if habits.is_empty() {
        None
    } else {
        let sum: u32 = habits.iter().map(|point| u32::from(point.performance)).sum();
        Some((sum / habits.len() as u32) as u8)
    };

    let daily_completion = WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(slot, day)| {
            let met = store
                .habits()
                .iter()
                .filter(|habit| habit.data[slot].value >= habit.target)
                .count();
            let completion_rate = if store.habits().is_empty() {
                0
            } else {
                (met as f64 / store.habits().len() as f64 * 100.0).round() as u8
            };
            DailyCompletionPoint {
                day: (*day).to_string(),
                completion_rate,
            }
        })
        .collect();

    StatsResponse {
        habit_count: store.habits().len(),
        total_streaks,
        average_performance,
        habits,
        daily_completion,
    }
}
