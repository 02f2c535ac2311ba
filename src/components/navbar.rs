//! Top navigation bar

use gpui::{
    div, prelude::FluentBuilder, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, StatefulInteractiveElement, Styled,
};

use employee_manager::routes::Route;

use crate::app::App;

impl App {
    pub fn render_navbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let authenticated = self.session.is_authenticated();

        let links: Vec<(&'static str, &'static str, Route)> = if authenticated {
            vec![
                ("nav-home", "Home", Route::Home),
                ("nav-employees", "Employees", Route::Employees),
                ("nav-add", "Add Employee", Route::AddEmployee),
            ]
        } else {
            vec![
                ("nav-home", "Home", Route::Home),
                ("nav-login", "Login", Route::Login),
                ("nav-signup", "Sign Up", Route::Signup),
            ]
        };

        div()
            .w_full()
            .px_6()
            .py_3()
            .bg(theme.navbar)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .id("nav-brand")
                    .cursor_pointer()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.primary)
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.navigate(Route::Home, cx);
                    }))
                    .child("Employee Management System"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .children(links.into_iter().map(|(id, label, target)| {
                        let active = *self.nav.current() == target;
                        div()
                            .id(id)
                            .cursor_pointer()
                            .text_sm()
                            .text_color(if active { theme.primary } else { theme.foreground_dim })
                            .when(active, |el| el.font_weight(FontWeight::BOLD))
                            .hover(|style| style.text_color(theme.foreground))
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.navigate(target.clone(), cx);
                            }))
                            .child(label)
                    }))
                    .when(authenticated, |el| {
                        el.child(
                            self.render_button("nav-logout", "Logout", theme.danger, true)
                                .on_click(cx.listener(|this, _event, _window, cx| {
                                    this.logout(cx);
                                })),
                        )
                    }),
            )
    }
}
