//! Employee list with search and delete confirmation

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};
use gpui_component::input::Input;

use employee_manager::api::Employee;
use employee_manager::models::{format_usd, ListBody};
use employee_manager::routes::Route;

use crate::app::App;

const COLUMNS: [(&str, f32); 6] = [
    ("Name", 2.),
    ("Email", 3.),
    ("Position", 2.),
    ("Department", 2.),
    ("Salary", 1.5),
    ("Actions", 2.5),
];

impl App {
    pub fn render_employee_list(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let term = self.search_input.read(cx).value().trim().to_string();
        let body = ListBody::select(&self.list_status, &self.employees, self.search_field, &term);

        let add_button = self
            .render_button("list-add", "Add New Employee", theme.primary, true)
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.navigate(Route::AddEmployee, cx);
            }));

        div()
            .w_full()
            .flex()
            .flex_col()
            .child(self.render_page_header("Employee List", Some(add_button.into_any_element())))
            .child(self.render_search_bar(cx))
            .when_some(self.list_status.error.clone(), |el, error| {
                el.child(self.render_error_banner(error))
            })
            .when_some(self.pending_delete.clone(), |el, id| {
                el.child(self.render_delete_confirmation(&id, cx))
            })
            .map(|el| match body {
                ListBody::Loading => el.child(self.render_loading("Loading employees...")),
                ListBody::NoEmployees => el.child(self.render_empty_list("No employees found")),
                ListBody::NoMatch => el.child(self.render_empty_list("No employees match your search")),
                ListBody::Rows(rows) => el.child(self.render_employee_table(&rows, cx)),
            })
    }

    fn render_empty_list(&self, message: &'static str) -> impl IntoElement {
        div()
            .py_8()
            .flex()
            .justify_center()
            .text_color(self.theme.foreground_muted)
            .child(message)
    }

    fn render_search_bar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let field = self.search_field;

        div()
            .w_full()
            .mb_4()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .id("search-field")
                    .px_3()
                    .py_1()
                    .rounded(px(6.))
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.card)
                    .text_sm()
                    .cursor_pointer()
                    .hover(|style| style.bg(theme.row_hover))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.toggle_search_field(cx);
                    }))
                    .child(format!("{} ▾", field.label())),
            )
            .child(div().flex_1().child(Input::new(&self.search_input)))
            .child(
                div()
                    .text_xs()
                    .text_color(theme.foreground_muted)
                    .child(field.placeholder()),
            )
    }

    fn render_delete_confirmation(&self, id: &str, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let name = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .map(Employee::full_name)
            .unwrap_or_else(|| "this employee".to_string());

        div()
            .w_full()
            .mb_4()
            .px_4()
            .py_3()
            .rounded(px(6.))
            .border_1()
            .border_color(theme.warning)
            .bg(theme.warning.opacity(0.1))
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .child(format!("Are you sure you want to delete {name}?")),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(
                        self.render_button("confirm-delete", "Delete", theme.danger, true)
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.confirm_delete(cx);
                            })),
                    )
                    .child(
                        self.render_button("cancel-delete", "Cancel", theme.foreground_dim, true)
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.cancel_delete(cx);
                            })),
                    ),
            )
    }

    fn render_employee_table(&self, employees: &[&Employee], cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .rounded(px(8.))
            .border_1()
            .border_color(theme.border)
            .overflow_hidden()
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .flex()
                    .bg(theme.navbar)
                    .text_sm()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground_dim)
                    .children(
                        COLUMNS
                            .iter()
                            .map(|(title, grow)| div().flex_grow().flex_basis(px(grow * 80.)).child(*title)),
                    ),
            )
            .children(
                employees
                    .iter()
                    .enumerate()
                    .map(|(index, employee)| self.render_employee_row(index, employee, cx)),
            )
    }

    fn render_employee_row(&self, index: usize, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let cells = [
            employee.full_name(),
            employee.email.clone(),
            employee.position.clone(),
            employee.department.clone(),
            format_usd(employee.salary),
        ];
        let (view_id, edit_id, delete_id) = (employee.id.clone(), employee.id.clone(), employee.id.clone());

        div()
            .id(SharedString::from(format!("row-{}", employee.id)))
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .text_sm()
            .when(index % 2 == 1, |el| el.bg(theme.row_alt))
            .hover(|style| style.bg(theme.row_hover))
            .children(
                cells
                    .into_iter()
                    .zip(COLUMNS.iter())
                    .map(|(text, (_, grow))| div().flex_grow().flex_basis(px(grow * 80.)).child(text)),
            )
            .child(
                div()
                    .flex_grow()
                    .flex_basis(px(COLUMNS[5].1 * 80.))
                    .flex()
                    .gap_2()
                    .child(
                        self.render_button(
                            SharedString::from(format!("view-{}", employee.id)),
                            "View",
                            theme.info,
                            true,
                        )
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.navigate(Route::EmployeeDetail(view_id.clone()), cx);
                        })),
                    )
                    .child(
                        self.render_button(
                            SharedString::from(format!("edit-{}", employee.id)),
                            "Edit",
                            theme.warning,
                            true,
                        )
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.navigate(Route::EditEmployee(edit_id.clone()), cx);
                        })),
                    )
                    .child(
                        self.render_button(
                            SharedString::from(format!("delete-{}", employee.id)),
                            "Delete",
                            theme.danger,
                            true,
                        )
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.request_delete(delete_id.clone(), cx);
                        })),
                    ),
            )
    }
}
