// Class module
// Class session model matching the schedule endpoint's wire format

use serde::{Deserialize, Deserializer};

/// A class session offered on a fixed set of weekdays
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEvent {
    /// Endpoint ids arrive as either JSON numbers or strings
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub instructor: String,
    /// Display time, pre-formatted by the endpoint (e.g. "9:00 AM")
    pub start_time: String,
    pub end_time: String,
    pub capacity: u32,
    pub enrolled: u32,
    #[serde(default)]
    pub price: f64,
    /// Recurrence rule: brace-delimited weekday tokens, e.g. "{M, W, F}"
    pub schedule: String,
}

impl ClassEvent {
    /// Create a new class with required fields
    ///
    /// # Arguments
    /// * `id` - Stable identifier from the data source
    /// * `title` - Class title (required, non-empty)
    /// * `schedule` - Weekday recurrence rule string
    ///
    /// # Returns
    /// Returns `Result<ClassEvent, String>` with validation
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Result<Self, String> {
        let class = Self {
            id: id.into(),
            title: title.into(),
            instructor: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            capacity: 0,
            enrolled: 0,
            price: 0.0,
            schedule: schedule.into(),
        };

        class.validate()?;
        Ok(class)
    }

    /// Create a builder for constructing classes with optional fields
    pub fn builder() -> ClassEventBuilder {
        ClassEventBuilder::new()
    }

    /// Validate the class
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Class title cannot be empty".to_string());
        }

        if self.schedule.trim().is_empty() {
            return Err("Class schedule cannot be empty".to_string());
        }

        Ok(())
    }

    /// Remaining open spots, saturating at zero for over-enrolled data
    pub fn spots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }

    /// Display form of the session time range
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::String(s) => s,
    })
}

/// Builder for creating classes with optional fields
pub struct ClassEventBuilder {
    id: Option<String>,
    title: Option<String>,
    instructor: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    capacity: u32,
    enrolled: u32,
    price: f64,
    schedule: Option<String>,
}

impl ClassEventBuilder {
    /// Create a new class builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            instructor: None,
            start_time: None,
            end_time: None,
            capacity: 0,
            enrolled: 0,
            price: 0.0,
            schedule: None,
        }
    }

    /// Set the class id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the class title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the instructor name
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Set the display start time
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Set the display end time
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Set the class capacity
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the current enrollment count
    pub fn enrolled(mut self, enrolled: u32) -> Self {
        self.enrolled = enrolled;
        self
    }

    /// Set the class price
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the weekday recurrence rule
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    /// Build the class
    pub fn build(self) -> Result<ClassEvent, String> {
        let id = self.id.ok_or("Class id is required")?;
        let title = self.title.ok_or("Class title is required")?;
        let schedule = self.schedule.ok_or("Class schedule is required")?;

        let class = ClassEvent {
            id,
            title,
            instructor: self.instructor.unwrap_or_default(),
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            capacity: self.capacity,
            enrolled: self.enrolled,
            price: self.price,
            schedule,
        };

        class.validate()?;
        Ok(class)
    }
}

impl Default for ClassEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
