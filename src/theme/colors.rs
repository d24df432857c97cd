//! Color palettes for the two themes.
//!
//! Emitted as CSS custom properties (`--light-*`, `--dark-*`) so the
//! per-component overlay classes in `styles.rs` can pick from either set.

use megilance_core::Theme;

pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub primary: &'static str,
    pub primary_text: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f7f8fc",
    surface: "#ffffff",
    surface_raised: "#f1f3f9",
    border: "#dde1ec",
    text: "#1a1d29",
    text_muted: "#5b6275",
    primary: "#4573df",
    primary_text: "#ffffff",
    success: "#27ae60",
    warning: "#f2994a",
    danger: "#e81123",
    info: "#2d9cdb",
    overlay: "rgba(26, 29, 41, 0.45)",
};

pub const DARK: Palette = Palette {
    background: "#0f121b",
    surface: "#171b27",
    surface_raised: "#1f2433",
    border: "#2c3245",
    text: "#eef1f8",
    text_muted: "#9aa3b8",
    primary: "#6d94ff",
    primary_text: "#0f121b",
    success: "#4cd787",
    warning: "#ffb36b",
    danger: "#ff5c6c",
    info: "#5cc2ff",
    overlay: "rgba(0, 0, 0, 0.6)",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    fn entries(&self) -> [(&'static str, &'static str); 13] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("surface-raised", self.surface_raised),
            ("border", self.border),
            ("text", self.text),
            ("text-muted", self.text_muted),
            ("primary", self.primary),
            ("primary-text", self.primary_text),
            ("success", self.success),
            ("warning", self.warning),
            ("danger", self.danger),
            ("info", self.info),
            ("overlay", self.overlay),
        ]
    }
}

/// `:root { --light-surface: ...; --dark-surface: ...; }`
pub fn palette_css() -> String {
    let mut css = String::from(":root {\n");
    for theme in [Theme::Light, Theme::Dark] {
        for (name, value) in Palette::for_theme(theme).entries() {
            css.push_str(&format!("  --{}-{}: {};\n", theme.as_str(), name, value));
        }
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_for_both_themes() {
        let css = palette_css();
        assert!(css.contains("--light-surface: #ffffff;"));
        assert!(css.contains("--dark-surface: #171b27;"));
        assert_eq!(css.matches("--light-").count(), css.matches("--dark-").count());
    }
}
