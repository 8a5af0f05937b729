use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Link to a registered patient; absent for walk-in bookings.
    pub patient_id: Option<String>,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub service_id: Option<String>,
    pub appointment_date: NaiveDate,
    /// Slot label as submitted by the booking form, e.g. "10:00".
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking-form payload. The store assigns id, created_at, and the
/// initial `pending` status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: Option<String>,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub service_id: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentPatch {
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub service_id: Option<Option<String>>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<String>,
    /// Any status may move to any other; there is no workflow enforcement.
    pub status: Option<AppointmentStatus>,
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(&self, appt: &mut Appointment) {
        if let Some(v) = &self.patient_name {
            appt.patient_name = v.clone();
        }
        if let Some(v) = &self.patient_email {
            appt.patient_email = v.clone();
        }
        if let Some(v) = &self.patient_phone {
            appt.patient_phone = v.clone();
        }
        if let Some(v) = &self.service_id {
            appt.service_id = v.clone();
        }
        if let Some(v) = self.appointment_date {
            appt.appointment_date = v;
        }
        if let Some(v) = &self.appointment_time {
            appt.appointment_time = v.clone();
        }
        if let Some(v) = self.status {
            appt.status = v;
        }
        if let Some(v) = &self.notes {
            appt.notes = v.clone();
        }
    }
}
