use chrono::Utc;

use crate::models::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};

use super::{fresh_id, MockStore};

impl MockStore {
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get_appointment_by_id(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Bookings linked to a registered patient, for the portal dashboard.
    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id.as_deref() == Some(patient_id))
            .collect()
    }

    /// Record a booking. Every new appointment starts as `pending`;
    /// id and created_at are assigned here.
    pub fn create_appointment(&mut self, new: NewAppointment) -> Appointment {
        let appt = Appointment {
            id: fresh_id(),
            patient_id: new.patient_id,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            patient_phone: new.patient_phone,
            service_id: new.service_id,
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time,
            status: AppointmentStatus::Pending,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.appointments.push(appt.clone());
        tracing::debug!(
            appointment_id = %appt.id,
            date = %appt.appointment_date,
            time = %appt.appointment_time,
            "appointment created"
        );
        appt
    }

    pub fn update_appointment(&mut self, id: &str, patch: &AppointmentPatch) -> Option<Appointment> {
        let appt = self.appointments.iter_mut().find(|a| a.id == id)?;
        patch.apply(appt);
        Some(appt.clone())
    }

    /// Status transitions are free-form: any status may move to any other.
    pub fn set_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> Option<Appointment> {
        self.update_appointment(id, &AppointmentPatch::status(status))
    }

    pub fn delete_appointment(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        self.appointments.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(patient_id: Option<&str>) -> NewAppointment {
        NewAppointment {
            patient_id: patient_id.map(String::from),
            patient_name: "Salma Khatun".into(),
            patient_email: "salma@example.com".into(),
            patient_phone: "+8801811000000".into(),
            service_id: None,
            appointment_date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
            appointment_time: "10:00".into(),
            notes: None,
        }
    }

    #[test]
    fn create_round_trips_with_generated_fields() {
        let mut store = MockStore::new();
        let created = store.create_appointment(booking(Some("u-1")));

        let found = store.get_appointment_by_id(&created.id).unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.status, AppointmentStatus::Pending);
        assert_eq!(found.patient_name, "Salma Khatun");
        assert_eq!(found.appointment_time, "10:00");
        assert!(!found.id.is_empty());
    }

    #[test]
    fn booking_form_produces_exactly_one_pending_record() {
        let mut store = MockStore::new();
        store.create_appointment(booking(Some("u-1")));

        assert_eq!(store.appointments().len(), 1);
        assert_eq!(store.appointments()[0].status, AppointmentStatus::Pending);
    }

    #[test]
    fn status_update_is_idempotent() {
        let mut store = MockStore::new();
        let created = store.create_appointment(booking(None));

        let once = store
            .set_appointment_status(&created.id, AppointmentStatus::Confirmed)
            .unwrap();
        let twice = store
            .set_appointment_status(&created.id, AppointmentStatus::Confirmed)
            .unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn any_status_may_move_to_any_other() {
        let mut store = MockStore::new();
        let created = store.create_appointment(booking(None));

        store
            .set_appointment_status(&created.id, AppointmentStatus::Completed)
            .unwrap();
        let reverted = store
            .set_appointment_status(&created.id, AppointmentStatus::Pending)
            .unwrap();
        assert_eq!(reverted.status, AppointmentStatus::Pending);
    }

    #[test]
    fn patient_filter_skips_walk_ins() {
        let mut store = MockStore::new();
        store.create_appointment(booking(Some("u-1")));
        store.create_appointment(booking(None));
        store.create_appointment(booking(Some("u-2")));

        let mine = store.appointments_for_patient("u-1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].patient_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let mut store = MockStore::new();
        assert!(store
            .set_appointment_status("missing", AppointmentStatus::Cancelled)
            .is_none());
        assert!(store.appointments().is_empty());
    }
}
