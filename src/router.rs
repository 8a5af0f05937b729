//! View routing and role-gated navigation.
//!
//! Maps address-bar paths of the form `/<page>` or `/<page>/<param...>`
//! onto a closed set of typed routes, renders exactly one view per
//! route, and guards protected pages. Guards run on every route change,
//! whether triggered by an explicit `navigate` call or by back/forward
//! history movement, and follow a short default-deny cascade:
//!
//! 1. Admin console + no user        → login
//! 2. Admin console + non-staff role → home
//! 3. Non-public page + no user      → login
//! 4. Otherwise                      → allow
//!
//! Unknown page tokens are not errors: they resolve to an explicit
//! blank view (subject to rule 3 like any non-public page).

use crate::session::SessionUser;

// ═══════════════════════════════════════════════════════════
// Route — typed page identifier + parameter payload
// ═══════════════════════════════════════════════════════════

/// Admin console sub-pages, selected by the first path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Users,
    Appointments,
    Services,
}

impl AdminSection {
    /// Unrecognized or missing parameters fall back to the dashboard.
    fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("users") => Self::Users,
            Some("appointments") => Self::Appointments,
            Some("services") => Self::Services,
            _ => Self::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    /// Catalog listing when `slug` is absent, detail view otherwise.
    Services { slug: Option<String> },
    BookAppointment,
    Contact,
    Login,
    ForgotPassword,
    PatientPortal,
    Admin {
        section: AdminSection,
        /// Raw first parameter as requested, preserved even when the
        /// section falls back to the dashboard.
        param: Option<String>,
    },
    /// Fallback for page tokens outside the closed set. Renders blank.
    Unknown { page: String, params: Vec<String> },
}

impl Route {
    /// Split a path into the page token and ordered parameters.
    /// An empty page token maps to home. No query-string handling.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.trim_start_matches('/').split('/').filter(|s| !s.is_empty());
        let page = segments.next().unwrap_or("");
        let params: Vec<String> = segments.map(String::from).collect();

        match page {
            "" | "home" => Self::Home,
            "about" => Self::About,
            "services" => Self::Services {
                slug: params.first().cloned(),
            },
            "book-appointment" => Self::BookAppointment,
            "contact" => Self::Contact,
            "login" => Self::Login,
            "forgot-password" => Self::ForgotPassword,
            "patient-portal" => Self::PatientPortal,
            "admin" => Self::Admin {
                section: AdminSection::from_param(params.first().map(String::as_str)),
                param: params.first().cloned(),
            },
            other => Self::Unknown {
                page: other.to_string(),
                params,
            },
        }
    }

    /// Address-bar representation of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/home".into(),
            Self::About => "/about".into(),
            Self::Services { slug: None } => "/services".into(),
            Self::Services { slug: Some(slug) } => format!("/services/{slug}"),
            Self::BookAppointment => "/book-appointment".into(),
            Self::Contact => "/contact".into(),
            Self::Login => "/login".into(),
            Self::ForgotPassword => "/forgot-password".into(),
            Self::PatientPortal => "/patient-portal".into(),
            Self::Admin { param: None, .. } => "/admin".into(),
            Self::Admin {
                param: Some(param), ..
            } => format!("/admin/{param}"),
            Self::Unknown { page, params } => {
                let mut path = format!("/{page}");
                for p in params {
                    path.push('/');
                    path.push_str(p);
                }
                path
            }
        }
    }

    /// Page token, ignoring parameters. Scroll reset keys off this.
    fn page_token(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services { .. } => "services",
            Self::BookAppointment => "book-appointment",
            Self::Contact => "contact",
            Self::Login => "login",
            Self::ForgotPassword => "forgot-password",
            Self::PatientPortal => "patient-portal",
            Self::Admin { .. } => "admin",
            Self::Unknown { page, .. } => page,
        }
    }

    /// Pages reachable without authentication. Login itself is always
    /// reachable (it is the redirect target).
    fn is_public(&self) -> bool {
        matches!(
            self,
            Self::Home
                | Self::About
                | Self::Services { .. }
                | Self::Contact
                | Self::BookAppointment
                | Self::ForgotPassword
        )
    }

    /// The single view rendered for this route.
    pub fn view(&self) -> View {
        match self {
            Self::Home => View::Home,
            Self::About => View::About,
            Self::Services { slug: None } => View::ServicesCatalog,
            Self::Services { slug: Some(_) } => View::ServiceDetail,
            Self::BookAppointment => View::BookAppointment,
            Self::Contact => View::Contact,
            Self::Login => View::Login,
            Self::ForgotPassword => View::ForgotPassword,
            Self::PatientPortal => View::PatientPortalDashboard,
            Self::Admin { section, .. } => match section {
                AdminSection::Dashboard => View::AdminDashboard,
                AdminSection::Users => View::AdminUsers,
                AdminSection::Appointments => View::AdminAppointments,
                AdminSection::Services => View::AdminServices,
            },
            Self::Unknown { .. } => View::Blank,
        }
    }
}

/// Top-level views. Exactly one is rendered per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    ServicesCatalog,
    ServiceDetail,
    BookAppointment,
    Contact,
    Login,
    ForgotPassword,
    PatientPortalDashboard,
    AdminDashboard,
    AdminUsers,
    AdminAppointments,
    AdminServices,
    /// Unknown page token: empty content area, not an error.
    Blank,
}

// ═══════════════════════════════════════════════════════════
// Guards
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToLogin,
    ToHome,
}

/// Default-deny cascade run on every route change. The role predicate
/// is `UserRole::can_access_admin` — the one authorization check shared
/// with any layout-level guard.
pub fn authorize(route: &Route, user: Option<&SessionUser>) -> GuardDecision {
    if let Route::Admin { .. } = route {
        return match user {
            None => GuardDecision::ToLogin,
            Some(u) if u.role.can_access_admin() => GuardDecision::Allow,
            Some(_) => GuardDecision::ToHome,
        };
    }
    if matches!(route, Route::Login) {
        return GuardDecision::Allow;
    }
    if !route.is_public() && user.is_none() {
        return GuardDecision::ToLogin;
    }
    GuardDecision::Allow
}

// ═══════════════════════════════════════════════════════════
// AddressBar — injected history seam
// ═══════════════════════════════════════════════════════════

/// Minimal address-bar contract: read the current path, push a new
/// history entry, or replace the current one.
pub trait AddressBar {
    fn current_path(&self) -> String;
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
}

/// In-memory address bar with a history stack and back/forward cursor.
#[derive(Debug)]
pub struct MemoryAddressBar {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryAddressBar {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
        }
    }

    /// Browser "back". Returns the new current path, or `None` at the
    /// start of history. The router must be told via `handle_external`.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Browser "forward".
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl AddressBar for MemoryAddressBar {
    fn current_path(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        // Pushing discards any forward entries, as browsers do.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }
}

// ═══════════════════════════════════════════════════════════
// Router
// ═══════════════════════════════════════════════════════════

/// Outcome of one route change.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: Route,
    pub view: View,
    /// Set when the page (not just a parameter) changed; the UI layer
    /// scrolls the viewport back to the top.
    pub reset_scroll: bool,
    /// A guard rewrote the requested destination.
    pub redirected: bool,
}

/// Owns the current route and the injected address bar.
pub struct Router<A: AddressBar> {
    address: A,
    current: Route,
}

impl<A: AddressBar> Router<A> {
    /// Derive the initial route from the address bar. An empty address
    /// defaults to the patient portal when a session already exists,
    /// to home otherwise.
    pub fn start(address: A, user: Option<&SessionUser>) -> (Self, Navigation) {
        let initial_path = address.current_path();
        let bare = initial_path.trim_matches('/').is_empty();
        let mut router = Self {
            address,
            current: Route::Home,
        };

        let requested = if bare && user.is_some() {
            Route::PatientPortal
        } else {
            Route::parse(&initial_path)
        };
        router.address.replace(&requested.path());
        let nav = router.settle(requested, user);
        (router, nav)
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    pub fn current_view(&self) -> View {
        self.current.view()
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut A {
        &mut self.address
    }

    /// Explicit navigation. `target` is either a bare page name
    /// ("about" — parameters cleared) or a `/`-prefixed path with
    /// parameters ("/services/teeth-whitening"). Pushes a history
    /// entry, then runs the guards.
    pub fn navigate(&mut self, target: &str, user: Option<&SessionUser>) -> Navigation {
        let requested = if let Some(path) = target.strip_prefix('/') {
            Route::parse(path)
        } else {
            Route::parse(&format!("/{target}"))
        };
        self.address.push(&requested.path());
        self.settle(requested, user)
    }

    /// External navigation (browser back/forward): re-parse the current
    /// address without pushing a new entry. Guards still run.
    pub fn handle_external(&mut self, user: Option<&SessionUser>) -> Navigation {
        let requested = Route::parse(&self.address.current_path());
        self.settle(requested, user)
    }

    /// Apply guards to a requested route, record the result, and build
    /// the navigation outcome. Guard redirects are force-navigations:
    /// they rewrite the current address entry in place — for explicit
    /// navigation that entry is the one just pushed.
    fn settle(&mut self, requested: Route, user: Option<&SessionUser>) -> Navigation {
        let (resolved, redirected) = match authorize(&requested, user) {
            GuardDecision::Allow => (requested, false),
            GuardDecision::ToLogin => {
                tracing::debug!(from = %requested.path(), "guard redirect to login");
                (Route::Login, true)
            }
            GuardDecision::ToHome => {
                tracing::debug!(from = %requested.path(), "guard redirect to home");
                (Route::Home, true)
            }
        };
        if redirected {
            self.address.replace(&resolved.path());
        }

        let reset_scroll = resolved.page_token() != self.current.page_token();
        self.current = resolved.clone();
        Navigation {
            view: resolved.view(),
            route: resolved,
            reset_scroll,
            redirected,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
