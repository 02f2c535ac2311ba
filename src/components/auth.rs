//! Login and Signup screens

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, StatefulInteractiveElement, Styled,
};

use employee_manager::routes::Route;

use crate::app::App;

impl App {
    pub fn render_login(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let loading = self.auth_status.loading;

        self.render_auth_card(
            "Login",
            div()
                .when_some(self.notice.clone(), |el, notice| el.child(self.render_notice(notice)))
                .when_some(self.auth_status.error.clone(), |el, error| {
                    el.child(self.render_error_banner(error))
                })
                .child(self.render_field("Email", &self.login_email))
                .child(self.render_field("Password", &self.login_password))
                .child(
                    self.render_button(
                        "login-submit",
                        if loading { "Logging in..." } else { "Login" },
                        theme.primary,
                        !loading,
                    )
                    .w_full()
                    .py_2()
                    .flex()
                    .justify_center()
                    .on_click(cx.listener(|this, _event, _window, cx| this.submit_login(cx))),
                )
                .child(self.render_auth_switch(
                    "Don't have an account?",
                    "Signup",
                    Route::Signup,
                    cx,
                )),
        )
    }

    pub fn render_signup(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let loading = self.auth_status.loading;

        self.render_auth_card(
            "Signup",
            div()
                .when_some(self.auth_status.error.clone(), |el, error| {
                    el.child(self.render_error_banner(error))
                })
                .child(self.render_field("Username", &self.signup_username))
                .child(self.render_field("Email", &self.signup_email))
                .child(self.render_field("Password", &self.signup_password))
                .child(
                    self.render_button(
                        "signup-submit",
                        if loading { "Signing up..." } else { "Signup" },
                        theme.success,
                        !loading,
                    )
                    .w_full()
                    .py_2()
                    .flex()
                    .justify_center()
                    .on_click(cx.listener(|this, _event, _window, cx| this.submit_signup(cx))),
                )
                .child(self.render_auth_switch(
                    "Already have an account?",
                    "Login",
                    Route::Login,
                    cx,
                )),
        )
    }

    fn render_auth_card(&self, title: &'static str, body: impl IntoElement) -> impl IntoElement {
        let theme = &self.theme;

        div().w_full().flex().justify_center().pt_8().child(
            self.render_card()
                .max_w(px(500.))
                .child(
                    div()
                        .mb_6()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.foreground)
                        .flex()
                        .justify_center()
                        .child(title),
                )
                .child(body),
        )
    }

    fn render_auth_switch(
        &self,
        prompt: &'static str,
        link: &'static str,
        target: Route,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .mt_4()
            .flex()
            .justify_center()
            .gap_1()
            .text_sm()
            .text_color(theme.foreground_dim)
            .child(prompt)
            .child(
                div()
                    .id(link)
                    .cursor_pointer()
                    .text_color(theme.primary)
                    .hover(|style| style.text_color(theme.info))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.navigate(target.clone(), cx);
                    }))
                    .child(link),
            )
    }
}
