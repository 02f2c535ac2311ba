//! Core App state and initialization for the Employee Manager GUI

use gpui::{
    div, prelude::FluentBuilder, AnyElement, AppContext as _, Context, Entity, InteractiveElement,
    IntoElement, ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState};

use employee_manager::api::{ApiClient, Employee};
use employee_manager::config::ClientConfig;
use employee_manager::models::{DashboardStats, EmployeeForm, ScreenStatus, SearchField};
use employee_manager::routes::{Navigator, Route};
use employee_manager::session::{FileTokenStore, SessionGate};

use crate::theme::Theme;

/// Text inputs backing the Add / Edit employee form
pub struct EmployeeInputs {
    pub first_name: Entity<InputState>,
    pub last_name: Entity<InputState>,
    pub email: Entity<InputState>,
    pub position: Entity<InputState>,
    pub department: Entity<InputState>,
    pub salary: Entity<InputState>,
}

impl EmployeeInputs {
    fn new(window: &mut Window, cx: &mut Context<App>) -> Self {
        Self {
            first_name: text_input("Enter first name", window, cx),
            last_name: text_input("Enter last name", window, cx),
            email: text_input("Enter email", window, cx),
            position: text_input("Enter position", window, cx),
            department: text_input("Enter department", window, cx),
            salary: text_input("Enter salary", window, cx),
        }
    }

    pub fn read(&self, cx: &gpui::App) -> EmployeeForm {
        EmployeeForm {
            first_name: self.first_name.read(cx).value().to_string(),
            last_name: self.last_name.read(cx).value().to_string(),
            email: self.email.read(cx).value().to_string(),
            position: self.position.read(cx).value().to_string(),
            department: self.department.read(cx).value().to_string(),
            salary: self.salary.read(cx).value().to_string(),
        }
    }

    fn entries(&self, form: EmployeeForm) -> [(Entity<InputState>, String); 6] {
        [
            (self.first_name.clone(), form.first_name),
            (self.last_name.clone(), form.last_name),
            (self.email.clone(), form.email),
            (self.position.clone(), form.position),
            (self.department.clone(), form.department),
            (self.salary.clone(), form.salary),
        ]
    }
}

fn text_input(placeholder: &'static str, window: &mut Window, cx: &mut Context<App>) -> Entity<InputState> {
    cx.new(|cx| InputState::new(window, cx).placeholder(placeholder))
}

fn password_input(placeholder: &'static str, window: &mut Window, cx: &mut Context<App>) -> Entity<InputState> {
    cx.new(|cx| InputState::new(window, cx).placeholder(placeholder).masked(true))
}

/// Main application state
pub struct App {
    pub theme: Theme,
    pub config: ClientConfig,
    pub nav: Navigator,
    pub notice: Option<String>,
    // Session failures that leave the user on the current screen
    pub session_error: Option<String>,

    // Session and API
    pub session: SessionGate,
    pub api_client: ApiClient,

    // Login / Signup
    pub login_email: Entity<InputState>,
    pub login_password: Entity<InputState>,
    pub signup_username: Entity<InputState>,
    pub signup_email: Entity<InputState>,
    pub signup_password: Entity<InputState>,
    pub auth_status: ScreenStatus,

    // Home
    pub stats: DashboardStats,
    pub stats_loading: bool,

    // Employee list
    pub employees: Vec<Employee>,
    pub list_status: ScreenStatus,
    pub search_field: SearchField,
    pub search_input: Entity<InputState>,
    pub pending_delete: Option<String>,

    // Employee detail
    pub employee: Option<Employee>,
    pub detail_status: ScreenStatus,

    // Add / Edit employee
    pub employee_inputs: EmployeeInputs,
    pub form_status: ScreenStatus,
    pub form_fetching: bool,

    // Input values to apply on the next render, where a window is available
    pub pending_inputs: Vec<(Entity<InputState>, String)>,
}

impl App {
    pub fn new(config: ClientConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session = SessionGate::new(FileTokenStore::new(config.token_file.clone()));
        let api_client = ApiClient::new(Some(config.api_url.clone()));

        let login_email = text_input("Enter email", window, cx);
        let login_password = password_input("Password", window, cx);
        let signup_username = text_input("Enter username", window, cx);
        let signup_email = text_input("Enter email", window, cx);
        let signup_password = password_input("Password (minimum 6 characters)", window, cx);
        let search_input = text_input("Type to filter...", window, cx);
        let employee_inputs = EmployeeInputs::new(window, cx);

        // Enter in a password field submits its form
        cx.subscribe_in(&login_password, window, |this, _state, event: &InputEvent, _window, cx| {
            if let InputEvent::PressEnter { .. } = event {
                this.submit_login(cx);
            }
        })
        .detach();
        cx.subscribe_in(&signup_password, window, |this, _state, event: &InputEvent, _window, cx| {
            if let InputEvent::PressEnter { .. } = event {
                this.submit_signup(cx);
            }
        })
        .detach();

        // The list filters on every keystroke
        cx.subscribe_in(&search_input, window, |_this, _state, _event: &InputEvent, _window, cx| {
            cx.notify();
        })
        .detach();

        Self {
            theme: Theme::new(),
            nav: Navigator::new(),
            notice: None,
            session_error: None,
            session,
            api_client,
            login_email,
            login_password,
            signup_username,
            signup_email,
            signup_password,
            auth_status: ScreenStatus::default(),
            stats: DashboardStats::default(),
            stats_loading: false,
            employees: vec![],
            list_status: ScreenStatus::default(),
            search_field: SearchField::default(),
            search_input,
            pending_delete: None,
            employee: None,
            detail_status: ScreenStatus::default(),
            employee_inputs,
            form_status: ScreenStatus::default(),
            form_fetching: false,
            pending_inputs: vec![],
            config,
        }
    }

    pub fn initialize(&mut self, cx: &mut Context<Self>) {
        let start = self.config.start_route();
        self.navigate(start, cx);
        self.watch_session_storage(cx);
    }

    /// Authenticated copy of the API client for a single request
    pub fn authorized_client(&self) -> ApiClient {
        self.api_client
            .clone()
            .with_token(self.session.token().map(str::to_owned))
    }

    pub fn queue_input(&mut self, input: &Entity<InputState>, value: impl Into<String>) {
        self.pending_inputs.push((input.clone(), value.into()));
    }

    pub fn queue_employee_form(&mut self, form: EmployeeForm) {
        let entries = self.employee_inputs.entries(form);
        self.pending_inputs.extend(entries);
    }

    fn apply_pending_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for (input, value) in std::mem::take(&mut self.pending_inputs) {
            input.update(cx, |state, cx| {
                state.set_value(value, window, cx);
            });
        }
    }

    fn render_screen(&self, cx: &Context<Self>) -> AnyElement {
        match self.nav.current() {
            Route::Login => self.render_login(cx).into_any_element(),
            Route::Signup => self.render_signup(cx).into_any_element(),
            Route::Home => self.render_home().into_any_element(),
            Route::Employees => self.render_employee_list(cx).into_any_element(),
            Route::EmployeeDetail(_) => self.render_employee_detail(cx).into_any_element(),
            Route::AddEmployee => self.render_employee_form(None, cx).into_any_element(),
            Route::EditEmployee(id) => self.render_employee_form(Some(id.clone()), cx).into_any_element(),
        }
    }
}

impl Render for App {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.apply_pending_inputs(window, cx);
        window.set_window_title(&format!("{} - Employee Manager", self.nav.current().title()));
        let theme = &self.theme;

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_navbar(cx))
            .child(
                div()
                    .id("screen")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_8()
                    .py_6()
                    .when_some(self.session_error.clone(), |el, error| {
                        el.child(self.render_error_banner(error))
                    })
                    .child(self.render_screen(cx)),
            )
    }
}
