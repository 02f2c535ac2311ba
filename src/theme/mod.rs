//! Theme for the Employee Manager GUI
//!
//! Monokai Pro palette mapped onto the roles a CRUD screen needs: navbar,
//! cards, table rows and the primary / info / warning / danger buttons.

use gpui::Hsla;

/// Monokai Pro color palette
pub mod colors {
    use gpui::rgb;

    pub fn bg_dark() -> gpui::Hsla { rgb(0x19181a).into() }      // #19181a
    pub fn bg_base() -> gpui::Hsla { rgb(0x2d2a2e).into() }      // #2d2a2e
    pub fn bg_light() -> gpui::Hsla { rgb(0x403e41).into() }     // #403e41
    pub fn bg_highlight() -> gpui::Hsla { rgb(0x5b595c).into() } // #5b595c

    pub fn fg_base() -> gpui::Hsla { rgb(0xfcfcfa).into() }      // #fcfcfa
    pub fn fg_dim() -> gpui::Hsla { rgb(0x939293).into() }       // #939293
    pub fn fg_muted() -> gpui::Hsla { rgb(0x727072).into() }     // #727072

    pub fn red() -> gpui::Hsla { rgb(0xff6188).into() }
    pub fn yellow() -> gpui::Hsla { rgb(0xffd866).into() }
    pub fn green() -> gpui::Hsla { rgb(0xa9dc76).into() }
    pub fn cyan() -> gpui::Hsla { rgb(0x78dce8).into() }
    pub fn purple() -> gpui::Hsla { rgb(0xab9df2).into() }
}

#[derive(Clone)]
pub struct Theme {
    // Surfaces
    pub background: Hsla,
    pub navbar: Hsla,
    pub card: Hsla,
    pub row_alt: Hsla,
    pub row_hover: Hsla,

    // Text
    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,
    pub on_accent: Hsla,

    // Buttons and banners
    pub primary: Hsla,
    pub success: Hsla,
    pub info: Hsla,
    pub warning: Hsla,
    pub danger: Hsla,

    pub border: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: colors::bg_base(),
            navbar: colors::bg_dark(),
            card: colors::bg_dark(),
            row_alt: colors::bg_light(),
            row_hover: colors::bg_highlight(),

            foreground: colors::fg_base(),
            foreground_dim: colors::fg_dim(),
            foreground_muted: colors::fg_muted(),
            on_accent: colors::bg_dark(),

            primary: colors::cyan(),
            success: colors::green(),
            info: colors::purple(),
            warning: colors::yellow(),
            danger: colors::red(),

            border: colors::bg_light(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }
}
