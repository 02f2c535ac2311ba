//! Single employee view

use gpui::{
    div, Context, FontWeight, IntoElement, ParentElement, SharedString,
    StatefulInteractiveElement, Styled,
};

use employee_manager::api::Employee;
use employee_manager::models::{format_date, format_usd};
use employee_manager::routes::Route;

use crate::app::App;

impl App {
    pub fn render_employee_detail(&self, cx: &Context<Self>) -> impl IntoElement {
        let body = if self.detail_status.loading {
            self.render_loading("Loading employee...").into_any_element()
        } else if let Some(error) = self.detail_status.error.clone() {
            self.render_error_banner(error).into_any_element()
        } else if let Some(employee) = &self.employee {
            self.render_employee_card(employee, cx).into_any_element()
        } else {
            self.render_error_banner("Employee not found").into_any_element()
        };

        let back = self
            .render_button("detail-back", "Back to List", self.theme.foreground_dim, true)
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.navigate(Route::Employees, cx);
            }));

        div()
            .w_full()
            .flex()
            .flex_col()
            .child(self.render_page_header("Employee Details", Some(back.into_any_element())))
            .child(body)
    }

    fn render_employee_card(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let edit_id = employee.id.clone();

        self.render_card()
            .child(
                div()
                    .mb_4()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.primary)
                    .child(employee.full_name()),
            )
            .child(self.render_detail_row("Email", employee.email.clone()))
            .child(self.render_detail_row("Position", employee.position.clone()))
            .child(self.render_detail_row("Department", employee.department.clone()))
            .child(self.render_detail_row("Salary", format_usd(employee.salary)))
            .child(self.render_detail_row(
                "Added On",
                format_date(employee.created_at.as_deref()),
            ))
            .child(
                div().mt_4().flex().child(
                    self.render_button("detail-edit", "Edit Employee", theme.warning, true)
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.navigate(Route::EditEmployee(edit_id.clone()), cx);
                        })),
                ),
            )
    }

    fn render_detail_row(&self, label: &'static str, value: String) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .py_2()
            .flex()
            .gap_4()
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .w_40()
                    .text_sm()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground_dim)
                    .child(label),
            )
            .child(div().text_sm().child(SharedString::from(value)))
    }
}
