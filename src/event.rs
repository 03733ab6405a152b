use crate::consts::DEFAULT_CORNER_RADIUS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shape the renderer clips a day's background image to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ImageShape {
    Circle,
    Rectangle,
    /// Rounded rectangle, corner radius in density-independent pixels
    Rounded { radius: u16 },
}

impl Default for ImageShape {
    /// Rounded rectangle with an 8dp corner radius.
    fn default() -> Self {
        Self::Rounded {
            radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// A background image attached to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Day the image is drawn behind.
    pub date:      NaiveDate,
    pub image_url: String,
    /// Defaults to [`ImageShape::default`] when absent.
    #[serde(default)]
    pub shape:     ImageShape,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, image_url: impl Into<String>, shape: ImageShape) -> Self {
        Self {
            date,
            image_url: image_url.into(),
            shape,
        }
    }
}

/// First event falling on `date`, if any.
pub fn find_event(events: &[CalendarEvent], date: NaiveDate) -> Option<&CalendarEvent> {
    events.iter().find(|event| event.date == date)
}
