//! Building blocks shared by the screens

use gpui::{
    div, prelude::FluentBuilder, px, AnyElement, Div, ElementId, Entity, FontWeight, Hsla,
    InteractiveElement, IntoElement, ParentElement, SharedString, Stateful, Styled,
};
use gpui_component::input::{Input, InputState};

use crate::app::App;

impl App {
    /// Filled button; callers attach `on_click`. Disabled buttons are greyed
    /// out and lose their hover state.
    pub fn render_button(
        &self,
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        color: Hsla,
        enabled: bool,
    ) -> Stateful<Div> {
        let theme = &self.theme;

        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded(px(6.))
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(theme.on_accent)
            .bg(if enabled { color } else { theme.foreground_muted })
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(|style| style.bg(color.opacity(0.8)))
            })
            .child(label.into())
    }

    pub fn render_error_banner(&self, message: impl Into<SharedString>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .mb_4()
            .px_4()
            .py_3()
            .rounded(px(6.))
            .border_1()
            .border_color(theme.danger)
            .bg(theme.danger.opacity(0.15))
            .text_sm()
            .text_color(theme.danger)
            .child(message.into())
    }

    pub fn render_notice(&self, message: impl Into<SharedString>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .mb_4()
            .px_4()
            .py_3()
            .rounded(px(6.))
            .border_1()
            .border_color(theme.success)
            .bg(theme.success.opacity(0.15))
            .text_sm()
            .text_color(theme.success)
            .child(message.into())
    }

    pub fn render_loading(&self, label: &'static str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .py_8()
            .flex()
            .justify_center()
            .text_color(theme.foreground_dim)
            .child(label)
    }

    /// Label stacked over a text input
    pub fn render_field(&self, label: &'static str, input: &Entity<InputState>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .mb_3()
            .child(
                div()
                    .text_sm()
                    .text_color(theme.foreground_dim)
                    .child(label),
            )
            .child(Input::new(input))
    }

    pub fn render_card(&self) -> Div {
        let theme = &self.theme;

        div()
            .w_full()
            .p_6()
            .rounded(px(8.))
            .bg(theme.card)
            .border_1()
            .border_color(theme.border)
    }

    pub fn render_page_header(&self, title: &'static str, action: Option<AnyElement>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .mb_6()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child(title),
            )
            .when_some(action, |el, action| el.child(action))
    }
}
