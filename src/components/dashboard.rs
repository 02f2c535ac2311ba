//! Home dashboard

use gpui::{div, px, FontWeight, Hsla, IntoElement, ParentElement, SharedString, Styled};

use employee_manager::models::format_usd_whole;

use crate::app::App;

impl App {
    pub fn render_home(&self) -> impl IntoElement {
        let theme = &self.theme;
        let stats = &self.stats;

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Employee Management Dashboard"),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(self.render_stat_card(
                        "Total Employees",
                        stats.total_employees.to_string(),
                        theme.primary,
                    ))
                    .child(self.render_stat_card(
                        "Average Salary",
                        format_usd_whole(stats.average_salary),
                        theme.success,
                    ))
                    .child(self.render_stat_card(
                        "Departments",
                        stats.departments.to_string(),
                        theme.info,
                    ))
                    .child(self.render_stat_card(
                        "Positions",
                        stats.positions.to_string(),
                        theme.warning,
                    )),
            )
            .child(
                self.render_card()
                    .child(
                        div()
                            .mb_3()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .child("Welcome to the Employee Management System"),
                    )
                    .child(
                        div()
                            .mb_2()
                            .text_color(theme.foreground_dim)
                            .child("Use the navigation bar to:"),
                    )
                    .children(
                        [
                            "View and search the full employee list",
                            "Add new employees",
                            "Open an employee to see their details",
                            "Edit or delete existing records",
                        ]
                        .into_iter()
                        .map(|line| {
                            div()
                                .pl_4()
                                .text_sm()
                                .text_color(theme.foreground_dim)
                                .child(format!("• {line}"))
                        }),
                    ),
            )
    }

    fn render_stat_card(&self, title: &'static str, value: String, color: Hsla) -> impl IntoElement {
        let theme = &self.theme;
        let value = if self.stats_loading {
            SharedString::from("...")
        } else {
            SharedString::from(value)
        };

        div()
            .flex_1()
            .p_4()
            .rounded(px(8.))
            .bg(color.opacity(0.15))
            .border_1()
            .border_color(color)
            .child(
                div()
                    .text_sm()
                    .text_color(theme.foreground_dim)
                    .child(title),
            )
            .child(
                div()
                    .mt_2()
                    .text_3xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(color)
                    .child(value),
            )
    }
}
