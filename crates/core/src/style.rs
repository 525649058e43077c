use colored::{Color, Colorize};

/// A named terminal style: optional foreground, optional background, and a
/// dim attribute.
///
/// Styles are plain const-constructible descriptors; the actual ANSI
/// assembly, terminal detection, and `NO_COLOR` handling are delegated to the
/// [`colored`] crate when [`apply`](Self::apply) runs. A fully unset style is
/// the identity and never touches the styling backend, so `log`-severity
/// output stays byte-identical to its input even when colors are forced on.
///
/// # Examples
///
/// ```
/// use jot_core::style::Style;
///
/// colored::control::set_override(false);
/// assert_eq!(Style::plain().apply("ready"), "ready");
/// assert_eq!(Style::MUTED.apply("ready"), "ready");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    dimmed: bool,
}

impl Style {
    /// Dimmed gray, used for the device-name prefix and the call-site suffix.
    pub const MUTED: Self = Self {
        fg: Some(Color::BrightBlack),
        bg: None,
        dimmed: true,
    };

    /// The identity style.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            dimmed: false,
        }
    }

    /// A foreground-only style.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            dimmed: false,
        }
    }

    /// A foreground-on-background style.
    #[must_use]
    pub const fn fg_bg(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            dimmed: false,
        }
    }

    /// A dim-attribute-only style.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            fg: None,
            bg: None,
            dimmed: true,
        }
    }

    /// Reports whether applying this style is the identity.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.dimmed
    }

    /// Applies the style to `text`, returning the styled string.
    ///
    /// Whether escapes are actually emitted is decided by the `colored`
    /// backend (terminal detection, `NO_COLOR`, explicit overrides).
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        if self.is_plain() {
            return text.to_owned();
        }
        let mut styled = text.normal();
        if let Some(color) = self.fg {
            styled = styled.color(color);
        }
        if let Some(color) = self.bg {
            styled = styled.on_color(color);
        }
        if self.dimmed {
            styled = styled.dimmed();
        }
        styled.to_string()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}
