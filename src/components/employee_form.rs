//! Add / Edit employee form
//!
//! Both screens share one set of inputs. On Add every field is required; on
//! Edit the inputs are prefilled and blank fields are left untouched on the
//! server.

use gpui::{
    div, prelude::FluentBuilder, px, Context, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled,
};

use employee_manager::routes::Route;

use crate::app::App;

impl App {
    /// `editing` carries the employee id on the Edit screen
    pub fn render_employee_form(&self, editing: Option<String>, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let loading = self.form_status.loading;
        let title = if editing.is_some() { "Edit Employee" } else { "Add New Employee" };

        let back = self
            .render_button("form-back", "Back to List", theme.foreground_dim, true)
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.navigate(Route::Employees, cx);
            }));

        let submit_label = match (&editing, loading) {
            (None, true) => "Adding...",
            (None, false) => "Add Employee",
            (Some(_), true) => "Updating...",
            (Some(_), false) => "Update Employee",
        };
        let submit = self
            .render_button(
                "form-submit",
                submit_label,
                if editing.is_some() { theme.warning } else { theme.success },
                !loading && !self.form_fetching,
            )
            .on_click(cx.listener(move |this, _event, _window, cx| match &editing {
                Some(id) => this.submit_employee_update(id.clone(), cx),
                None => this.submit_new_employee(cx),
            }));

        let inputs = &self.employee_inputs;

        div()
            .w_full()
            .flex()
            .flex_col()
            .child(self.render_page_header(title, Some(back.into_any_element())))
            .when_some(self.form_status.error.clone(), |el, error| {
                el.child(self.render_error_banner(error))
            })
            .child(if self.form_fetching {
                self.render_loading("Loading employee...").into_any_element()
            } else {
                self.render_card()
                    .max_w(px(720.))
                    .child(
                        div()
                            .flex()
                            .gap_4()
                            .child(self.render_field("First Name", &inputs.first_name))
                            .child(self.render_field("Last Name", &inputs.last_name)),
                    )
                    .child(self.render_field("Email", &inputs.email))
                    .child(
                        div()
                            .flex()
                            .gap_4()
                            .child(self.render_field("Position", &inputs.position))
                            .child(self.render_field("Department", &inputs.department)),
                    )
                    .child(self.render_field("Salary", &inputs.salary))
                    .child(div().mt_2().flex().child(submit))
                    .into_any_element()
            })
    }
}
