// Settings module
// User-facing configuration for the calendar engine

use serde::{Deserialize, Serialize};

use crate::models::calendar::WeekStart;
use crate::models::event::validate_color;
use crate::models::ui::ViewType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday through 6 = Saturday
    pub first_day_of_week: u8,
    pub default_view: ViewType,
    /// Spacing of the time-axis grid lines in the week view
    pub slot_interval_minutes: u32,
    /// Horizontal distance a touch must travel to count as a month swipe
    pub swipe_threshold_px: f32,
    pub default_event_color: String,
    /// Title given to events created by dragging on the week view
    pub new_event_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_view: ViewType::Month,
            slot_interval_minutes: 60,
            swipe_threshold_px: 50.0,
            default_event_color: "#3b82f6".to_string(),
            new_event_title: "New Event".to_string(),
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        WeekStart::new(self.first_day_of_week).map_err(|e| e.to_string())?;

        if !matches!(self.slot_interval_minutes, 30 | 60) {
            return Err(format!(
                "Slot interval must be 30 or 60 minutes, got {}",
                self.slot_interval_minutes
            ));
        }

        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err("Swipe threshold must be a positive number of pixels".to_string());
        }

        validate_color(Some(&self.default_event_color)).map_err(|e| e.to_string())?;

        if self.new_event_title.trim().is_empty() {
            return Err("New event title cannot be empty".to_string());
        }

        Ok(())
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::new(self.first_day_of_week).unwrap_or_default()
    }
}
