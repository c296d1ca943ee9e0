// Booking service
// Validates booking requests and submits them through a backend seam.
// Unlike the original flow, submission reports success or failure distinctly
// so the UI can reflect the outcome instead of silently closing the form.

use thiserror::Error;

use crate::models::class::ClassEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub class_id: String,
    pub name: String,
    pub email: String,
}

/// Confirmation returned on a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub class_id: String,
    pub class_title: String,
    pub attendee: String,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!("Booked {} for {}", self.class_title, self.attendee)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("a name is required to book a class")]
    MissingName,
    #[error("a valid email address is required to book a class")]
    InvalidEmail,
    #[error("booking submission failed: {0}")]
    SubmissionFailed(String),
}

/// Accepts validated booking requests. Persistence is out of scope, so the
/// bundled backend confirms in memory; a real API client implements the same
/// trait.
pub trait BookingBackend {
    fn submit(&mut self, request: &BookingRequest) -> Result<(), BookingError>;
}

/// Backend that records submissions without persisting them anywhere
#[derive(Debug, Default)]
pub struct InMemoryBookingBackend {
    submitted: Vec<BookingRequest>,
}

impl InMemoryBookingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[BookingRequest] {
        &self.submitted
    }
}

impl BookingBackend for InMemoryBookingBackend {
    fn submit(&mut self, request: &BookingRequest) -> Result<(), BookingError> {
        self.submitted.push(request.clone());
        Ok(())
    }
}

pub struct BookingService<B: BookingBackend> {
    backend: B,
}

impl<B: BookingBackend> BookingService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Validate and submit a booking for `class`.
    pub fn book(
        &mut self,
        class: &ClassEvent,
        name: &str,
        email: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(BookingError::MissingName);
        }
        if !is_plausible_email(email) {
            return Err(BookingError::InvalidEmail);
        }

        let request = BookingRequest {
            class_id: class.id.clone(),
            name: name.to_string(),
            email: email.to_string(),
        };

        self.backend.submit(&request)?;
        log::info!("Booked class {} for {}", class.id, name);

        Ok(BookingConfirmation {
            class_id: class.id.clone(),
            class_title: class.title.clone(),
            attendee: name.to_string(),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

// Not RFC 5322; just enough shape-checking to catch obvious typos
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
