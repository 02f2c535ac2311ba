//! Navigation, form submission and data loading for the Employee Manager GUI
//!
//! Every backend call runs on the background executor with a cloned
//! [`ApiClient`]; results are applied back on the foreground via
//! `this.update`. A result that arrives after the visit it was started on
//! has ended is dropped, even when the user is back on the same screen.

use gpui::{AppContext as _, Context};
use tracing::{debug, error, info, warn};

use employee_manager::api::ApiError;
use employee_manager::models::{DashboardStats, EmployeeForm, LoginForm, ScreenStatus, SignupForm};
use employee_manager::routes::{resolve, Route, Visit};

use crate::app::App;

pub const LOGOUT_NOTICE: &str = "Successfully logged out!";

impl App {
    /// Switch screens, redirecting through the session gate, and kick off
    /// whatever fetch the target screen needs.
    pub fn navigate(&mut self, requested: Route, cx: &mut Context<Self>) {
        let route = self.nav.go(requested.clone(), self.session.is_authenticated());
        if route != requested {
            info!(requested = %requested, redirected_to = %route, "route guarded");
        } else {
            debug!(route = %route, "navigating");
        }

        self.notice = None;
        self.session_error = None;
        self.pending_delete = None;

        match route {
            Route::Login | Route::Signup => self.auth_status = ScreenStatus::default(),
            Route::Home => self.load_dashboard(cx),
            Route::Employees => self.load_employees(cx),
            Route::EmployeeDetail(id) => self.load_employee_detail(id, cx),
            Route::AddEmployee => {
                self.form_status = ScreenStatus::default();
                self.form_fetching = false;
                self.queue_employee_form(EmployeeForm::default());
            }
            Route::EditEmployee(id) => self.load_employee_for_edit(id, cx),
        }
        cx.notify();
    }

    // ---- Session ----

    pub fn submit_login(&mut self, cx: &mut Context<Self>) {
        if self.auth_status.loading {
            return;
        }
        let form = LoginForm {
            email: self.login_email.read(cx).value().to_string(),
            password: self.login_password.read(cx).value().to_string(),
        };
        if let Err(e) = form.validate() {
            self.auth_status.fail(e.to_string());
            cx.notify();
            return;
        }

        self.auth_status.begin();
        self.notice = None;
        cx.notify();

        let visit = self.nav.visit();
        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.login(form.email.trim(), &form.password) })
                .await;
            let _ = this.update(cx, |app, cx| app.finish_auth(visit, Route::Login, result, cx));
        })
        .detach();
    }

    pub fn submit_signup(&mut self, cx: &mut Context<Self>) {
        if self.auth_status.loading {
            return;
        }
        let form = SignupForm {
            username: self.signup_username.read(cx).value().to_string(),
            email: self.signup_email.read(cx).value().to_string(),
            password: self.signup_password.read(cx).value().to_string(),
        };
        if let Err(e) = form.validate() {
            self.auth_status.fail(e.to_string());
            cx.notify();
            return;
        }

        self.auth_status.begin();
        cx.notify();

        let visit = self.nav.visit();
        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move {
                    api_client.signup(form.username.trim(), form.email.trim(), &form.password)
                })
                .await;
            let _ = this.update(cx, |app, cx| app.finish_auth(visit, Route::Signup, result, cx));
        })
        .detach();
    }

    fn finish_auth(
        &mut self,
        visit: Visit,
        origin: Route,
        result: Result<String, ApiError>,
        cx: &mut Context<Self>,
    ) {
        if !self.nav.is_current(visit) {
            return;
        }
        match result {
            Ok(token) => match self.session.login(token) {
                Ok(()) => {
                    let password = match origin {
                        Route::Signup => self.signup_password.clone(),
                        _ => self.login_password.clone(),
                    };
                    self.queue_input(&password, "");
                    self.navigate(Route::Home, cx);
                }
                Err(e) => {
                    error!(error = %e, "could not persist session");
                    self.auth_status.fail("Could not save the session");
                }
            },
            Err(e) => {
                warn!(screen = %origin, error = %e, "authentication failed");
                self.auth_status.fail(e.to_string());
            }
        }
        cx.notify();
    }

    pub fn logout(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.session.logout() {
            // Still logged in: the stored token would come back on the next poll
            error!(error = %e, "failed to clear stored session");
            self.session_error = Some(format!("Logout failed: {e:#}"));
            cx.notify();
            return;
        }
        let (login_password, signup_password) =
            (self.login_password.clone(), self.signup_password.clone());
        self.queue_input(&login_password, "");
        self.queue_input(&signup_password, "");

        self.employees.clear();
        self.employee = None;
        self.stats = DashboardStats::default();

        self.navigate(Route::Login, cx);
        self.notice = Some(LOGOUT_NOTICE.to_string());
        cx.notify();
    }

    /// Poll the token store so a login or logout from another instance
    /// re-evaluates the current screen.
    pub fn watch_session_storage(&mut self, cx: &mut Context<Self>) {
        let interval = self.config.storage_poll_interval();
        cx.spawn(async move |this, cx| {
            loop {
                smol::Timer::after(interval).await;
                let alive = this.update(cx, |app, cx| {
                    if app.session.poll_external_change() {
                        app.on_session_changed(cx);
                    }
                });
                if alive.is_err() {
                    break;
                }
            }
        })
        .detach();
    }

    fn on_session_changed(&mut self, cx: &mut Context<Self>) {
        let current = self.nav.current().clone();
        let target = resolve(current.clone(), self.session.is_authenticated());
        if target != current {
            self.navigate(target, cx);
        } else {
            cx.notify();
        }
    }

    // ---- Home ----

    pub fn load_dashboard(&mut self, cx: &mut Context<Self>) {
        self.stats = DashboardStats::default();
        self.stats_loading = true;

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.list_employees() })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                app.stats_loading = false;
                match result {
                    Ok(employees) => app.stats = DashboardStats::from_employees(&employees),
                    Err(e) => warn!(error = %e, "error fetching dashboard stats"),
                }
                cx.notify();
            });
        })
        .detach();
    }

    // ---- Employee list ----

    pub fn load_employees(&mut self, cx: &mut Context<Self>) {
        self.list_status.begin();

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.list_employees() })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                match result {
                    Ok(employees) => {
                        app.employees = employees;
                        app.list_status.finish();
                    }
                    Err(e) => {
                        app.employees.clear();
                        app.list_status.fail(e.to_string());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn toggle_search_field(&mut self, cx: &mut Context<Self>) {
        self.search_field = self.search_field.toggled();
        cx.notify();
    }

    pub fn request_delete(&mut self, id: String, cx: &mut Context<Self>) {
        self.pending_delete = Some(id);
        cx.notify();
    }

    pub fn cancel_delete(&mut self, cx: &mut Context<Self>) {
        self.pending_delete = None;
        cx.notify();
    }

    /// Delete the confirmed employee, then refetch the list
    pub fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.list_status.error = None;
        cx.notify();

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let deleted = id.clone();
            let result = cx
                .background_spawn(async move { api_client.delete_employee(&deleted) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                match result {
                    Ok(()) => {
                        info!(id = %id, "employee deleted");
                        app.load_employees(cx);
                    }
                    Err(e) => app.list_status.fail(e.to_string()),
                }
                cx.notify();
            });
        })
        .detach();
    }

    // ---- Employee detail ----

    pub fn load_employee_detail(&mut self, id: String, cx: &mut Context<Self>) {
        self.employee = None;
        self.detail_status = ScreenStatus::loading();

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.get_employee(&id) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                match result {
                    Ok(employee) => {
                        app.employee = Some(employee);
                        app.detail_status.finish();
                    }
                    Err(e) => app.detail_status.fail(e.to_string()),
                }
                cx.notify();
            });
        })
        .detach();
    }

    // ---- Add / Edit employee ----

    pub fn load_employee_for_edit(&mut self, id: String, cx: &mut Context<Self>) {
        self.form_status = ScreenStatus::default();
        self.form_fetching = true;
        self.queue_employee_form(EmployeeForm::default());

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.get_employee(&id) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                app.form_fetching = false;
                match result {
                    Ok(employee) => app.queue_employee_form(EmployeeForm::from_employee(&employee)),
                    Err(e) => app.form_status.fail(e.to_string()),
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn submit_new_employee(&mut self, cx: &mut Context<Self>) {
        if self.form_status.loading {
            return;
        }
        let employee = match self.employee_inputs.read(cx).to_new_employee() {
            Ok(employee) => employee,
            Err(e) => {
                self.form_status.fail(e.to_string());
                cx.notify();
                return;
            }
        };

        self.form_status.begin();
        cx.notify();

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.create_employee(&employee) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                match result {
                    Ok(()) => {
                        app.form_status.finish();
                        app.navigate(Route::Employees, cx);
                    }
                    Err(e) => app.form_status.fail(e.to_string()),
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn submit_employee_update(&mut self, id: String, cx: &mut Context<Self>) {
        if self.form_status.loading || self.form_fetching {
            return;
        }
        let update = match self.employee_inputs.read(cx).to_update() {
            Ok(update) => update,
            Err(e) => {
                self.form_status.fail(e.to_string());
                cx.notify();
                return;
            }
        };

        self.form_status.begin();
        cx.notify();

        let visit = self.nav.visit();
        let api_client = self.authorized_client();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.update_employee(&id, &update) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if !app.nav.is_current(visit) {
                    return;
                }
                match result {
                    Ok(()) => {
                        app.form_status.finish();
                        app.navigate(Route::Employees, cx);
                    }
                    Err(e) => app.form_status.fail(e.to_string()),
                }
                cx.notify();
            });
        })
        .detach();
    }
}
