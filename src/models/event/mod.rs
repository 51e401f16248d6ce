// Event module
// Calendar event model, creation input and partial updates

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier assigned by the event manager at creation time.
pub type EventId = String;

/// Structural problems with event input. Temporal ordering is never checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event {0} is required")]
    MissingField(&'static str),
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Color must be in hex format (#RRGGBB or #RGB), got {0:?}")]
    InvalidColor(String),
}

/// Calendar event as stored by the event manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl Event {
    /// Create a builder for the input of a new event
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Get the duration of the event. Negative when `end` precedes `start`.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The calendar day the event belongs to (its start day).
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Merge `patch` into this event. The id never changes.
    pub(crate) fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    pub(crate) fn validate(&self) -> Result<(), EventError> {
        validate_title(&self.title)?;
        validate_color(self.color.as_deref())
    }
}

/// Event fields supplied on creation, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl NewEvent {
    /// Create event input with the required fields only
    ///
    /// # Examples
    /// ```
    /// use calendar_engine::models::event::NewEvent;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(9, 30, 0).unwrap();
    /// let input = NewEvent::new("Team Standup", start, end).unwrap();
    /// assert_eq!(input.title, "Team Standup");
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventError> {
        let input = Self {
            title: title.into(),
            description: None,
            start,
            end,
            color: None,
            category: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate the structural fields
    pub fn validate(&self) -> Result<(), EventError> {
        validate_title(&self.title)?;
        validate_color(self.color.as_deref())
    }

    pub(crate) fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            start: self.start,
            end: self.end,
            color: self.color,
            category: self.category,
        }
    }
}

/// Builder for event input with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: Option<String>,
    category: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the event input, rejecting missing or malformed fields
    pub fn build(self) -> Result<NewEvent, EventError> {
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start"))?;
        let end = self.end.ok_or(EventError::MissingField("end"))?;

        let input = NewEvent {
            title,
            description: self.description,
            start,
            end,
            color: self.color,
            category: self.category,
        };

        input.validate()?;
        Ok(input)
    }
}

/// Partial update merged into an existing event.
///
/// `None` leaves a field untouched. For the optional fields, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

impl EventPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Some(color.into()));
        self
    }

    pub fn clear_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Some(category.into()));
        self
    }

    pub fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn validate_title(title: &str) -> Result<(), EventError> {
    if title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    Ok(())
}

pub(crate) fn validate_color(color: Option<&str>) -> Result<(), EventError> {
    let Some(color) = color else {
        return Ok(());
    };

    let digits = color.strip_prefix('#').unwrap_or("");
    let well_formed = (digits.len() == 6 || digits.len() == 3)
        && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(EventError::InvalidColor(color.to_string()));
    }
    Ok(())
}
