//! Screens of the app and the guard that decides which one a navigation
//! request actually lands on.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
    Employees,
    EmployeeDetail(String),
    AddEmployee,
    EditEmployee(String),
}

impl Route {
    /// Every screen except Login and Signup needs a session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Home => "/".to_string(),
            Route::Employees => "/employees".to_string(),
            Route::EmployeeDetail(id) => format!("/employee/{}", urlencoding::encode(id)),
            Route::AddEmployee => "/add-employee".to_string(),
            Route::EditEmployee(id) => format!("/edit-employee/{}", urlencoding::encode(id)),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["signup"] => Some(Route::Signup),
            ["employees"] => Some(Route::Employees),
            ["add-employee"] => Some(Route::AddEmployee),
            ["employee", id] => decode(id).map(Route::EmployeeDetail),
            ["edit-employee", id] => decode(id).map(Route::EditEmployee),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Home => "Dashboard",
            Route::Employees => "Employee List",
            Route::EmployeeDetail(_) => "Employee Details",
            Route::AddEmployee => "Add Employee",
            Route::EditEmployee(_) => "Edit Employee",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment)
        .ok()
        .map(|s| s.into_owned())
        .filter(|s| !s.is_empty())
}

/// Where a request for `requested` ends up given the session state.
///
/// Protected screens bounce to Login without a session; Login and Signup
/// bounce to Home with one.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    match (requested.is_protected(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::Home,
        _ => requested,
    }
}

/// One stay on a screen. Navigating again, even to the same route, starts a
/// new visit, so a response started on an earlier visit can be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visit(u64);

/// Current screen plus the visit it belongs to
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    visit: Visit,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Route::Login,
            visit: Visit::default(),
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn visit(&self) -> Visit {
        self.visit
    }

    /// Land on `requested` as the guard allows and start a new visit
    pub fn go(&mut self, requested: Route, authenticated: bool) -> Route {
        self.current = resolve(requested, authenticated);
        self.visit = Visit(self.visit.0.wrapping_add(1));
        self.current.clone()
    }

    pub fn is_current(&self, visit: Visit) -> bool {
        self.visit == visit
    }
}
