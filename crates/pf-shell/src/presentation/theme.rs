use pf_core::Theme;

/// `data-theme` attribute for the page body.
pub fn theme_attribute(theme: Theme) -> String {
    format!("data-theme=\"{}\"", theme.as_str())
}

/// Toggle button; its title names the theme a click switches to.
pub fn render_theme_toggle(theme: Theme) -> String {
    let title = match theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    };
    format!(
        "<button class=\"theme-toggle\" aria-label=\"Toggle colour scheme\" title=\"{title}\"></button>"
    )
}
