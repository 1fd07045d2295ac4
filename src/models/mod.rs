pub mod insights;
pub mod set;

pub use insights::{
  BodyweightPoint, ChartDataPoint, ExerciseSummary, PersonalRecord, WeekCount, WeeklyVolume,
  WorkoutFrequency, WorkoutTotals,
};
pub use set::{BodyweightEntry, ExerciseMode, ParseModeError, SetRecord};
