use chrono::Utc;

use crate::models::{ContactMessage, MessageStatus, NewContactMessage};

use super::{fresh_id, MockStore};

impl MockStore {
    pub fn contact_messages(&self) -> &[ContactMessage] {
        &self.contact_messages
    }

    pub fn get_contact_message_by_id(&self, id: &str) -> Option<&ContactMessage> {
        self.contact_messages.iter().find(|m| m.id == id)
    }

    /// Single write path for contact-form submissions. New messages
    /// start as `new` until staff mark them read/replied.
    pub fn create_contact_message(&mut self, new: NewContactMessage) -> ContactMessage {
        let msg = ContactMessage {
            id: fresh_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: MessageStatus::New,
            created_at: Utc::now(),
        };
        self.contact_messages.push(msg.clone());
        tracing::debug!(message_id = %msg.id, "contact message created");
        msg
    }

    pub fn set_message_status(&mut self, id: &str, status: MessageStatus) -> Option<ContactMessage> {
        let msg = self.contact_messages.iter_mut().find(|m| m.id == id)?;
        msg.status = status;
        Some(msg.clone())
    }

    pub fn delete_contact_message(&mut self, id: &str) -> bool {
        let before = self.contact_messages.len();
        self.contact_messages.retain(|m| m.id != id);
        self.contact_messages.len() < before
    }
}
