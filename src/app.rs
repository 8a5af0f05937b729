//! Composition root — store, auth, and router wired together.
//!
//! Everything is dependency-injected: the store is an explicit
//! instance, the session mirror comes in as a `SessionStore` box, and
//! the router owns an in-memory address bar. `boot` is the process
//! start: restore the persisted session, then resolve the initial
//! route from the address.

use crate::auth::{AuthError, AuthService, SignUp};
use crate::models::{Appointment, ContactMessage, NewAppointment, NewContactMessage};
use crate::router::{MemoryAddressBar, Navigation, Router, View};
use crate::session::{SessionStore, SessionUser};
use crate::store::MockStore;

pub struct App {
    store: MockStore,
    auth: AuthService,
    router: Router<MemoryAddressBar>,
}

impl App {
    /// Bring the application core up: restore any persisted session,
    /// then derive the initial route from `initial_path`.
    pub fn boot(
        store: MockStore,
        session: Box<dyn SessionStore>,
        initial_path: &str,
    ) -> (Self, Navigation) {
        let mut auth = AuthService::new(session);
        auth.restore();
        let user = auth.current_user().cloned();
        let (router, nav) = Router::start(MemoryAddressBar::new(initial_path), user.as_ref());
        (
            Self {
                store,
                auth,
                router,
            },
            nav,
        )
    }

    // ── Accessors ────────────────────────────────────────

    pub fn store(&self) -> &MockStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MockStore {
        &mut self.store
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.auth.current_user()
    }

    pub fn current_view(&self) -> View {
        self.router.current_view()
    }

    // ── Navigation ───────────────────────────────────────

    pub fn navigate(&mut self, target: &str) -> Navigation {
        let user = self.auth.current_user().cloned();
        self.router.navigate(target, user.as_ref())
    }

    /// Browser back. `None` at the start of history.
    pub fn go_back(&mut self) -> Option<Navigation> {
        self.router.address_mut().back()?;
        let user = self.auth.current_user().cloned();
        Some(self.router.handle_external(user.as_ref()))
    }

    /// Browser forward. `None` at the end of history.
    pub fn go_forward(&mut self) -> Option<Navigation> {
        self.router.address_mut().forward()?;
        let user = self.auth.current_user().cloned();
        Some(self.router.handle_external(user.as_ref()))
    }

    // ── Auth flows (form submit handlers) ────────────────

    /// Sign in and land on the patient portal.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<Navigation, AuthError> {
        self.auth.sign_in(&self.store, email, password)?;
        Ok(self.navigate("patient-portal"))
    }

    /// Register, auto-sign-in, and land on the patient portal.
    pub fn sign_up(&mut self, form: SignUp) -> Result<Navigation, AuthError> {
        self.auth.sign_up(&mut self.store, form)?;
        Ok(self.navigate("patient-portal"))
    }

    /// Sign out and return to the public home page.
    pub fn sign_out(&mut self) -> Navigation {
        self.auth.sign_out();
        self.navigate("home")
    }

    pub fn request_password_reset(&mut self, email: &str) -> Result<String, AuthError> {
        let token = self.auth.request_password_reset(&mut self.store, email)?;
        Ok(token.token)
    }

    pub fn reset_password(
        &mut self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        self.auth
            .reset_password(&mut self.store, email, token, new_password)
    }

    // ── Form submissions backed by the store ─────────────

    /// Booking-form submit. A signed-in patient is linked to the new
    /// appointment unless the form already named one.
    pub fn book_appointment(&mut self, mut booking: NewAppointment) -> Appointment {
        if booking.patient_id.is_none() {
            booking.patient_id = self.auth.current_user().map(|u| u.id.clone());
        }
        self.store.create_appointment(booking)
    }

    /// Contact-form submit: goes straight into the store, the single
    /// write path for messages.
    pub fn submit_contact_message(&mut self, message: NewContactMessage) -> ContactMessage {
        self.store.create_contact_message(message)
    }
}

// ═══════════════════════════════════════════════════════════
// Integration tests — end-to-end user journeys
// ═══════════════════════════════════════════════════════════
