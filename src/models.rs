use serde::{Deserialize, Serialize};

/// Fixed Mon..Sun week; every habit carries exactly one value per slot.
pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Logging always targets the last slot of the fixed week. The app keeps no
/// calendar dates; "today" is the Sunday slot.
pub const TODAY_SLOT: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub target: f64,
    pub unit: String,
    pub color: String,
    pub data: Vec<DayPoint>,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub habit_id: u64,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct NewReminderRequest {
    pub habit_id: u64,
    pub message: String,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub target: f64,
    pub unit: String,
    pub color: String,
    pub data: Vec<DayPoint>,
    pub streak: u32,
    pub performance: u8,
}

#[derive(Debug, Serialize)]
pub struct HabitPerformancePoint {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub streak: u32,
    pub performance: u8,
}

#[derive(Debug, Serialize)]
pub struct DailyCompletionPoint {
    pub day: String,
    pub completion_rate: u8,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub habit_count: usize,
    pub total_streaks: u32,
    pub average_performance: Option<u8>,
    pub habits: Vec<HabitPerformancePoint>,
    pub daily_completion: Vec<DailyCompletionPoint>,
}
