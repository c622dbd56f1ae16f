use parqview_config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub fg: Color,
    pub border_focused: Style,
    pub help: Style,
    pub status_error: Style,
    pub status_info: Style,
    pub table_header: Style,
    pub selection: Style,
    pub directory: Style,
    pub cursor: Style,
    pub placeholder: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fg = parse_color_or_default(&config.fg);
        let border_focused = parse_color_or_default(&config.border_focused);
        let help = parse_color_or_default(&config.help);
        let status_error = parse_color_or_default(&config.status_error);
        let status_info = parse_color_or_default(&config.status_info);
        let header_border = parse_color_or_default(&config.header_border);
        let selection_fg = parse_color_or_default(&config.selection_fg);
        let selection_bg = parse_color_or_default(&config.selection_bg);
        let directory = parse_color_or_default(&config.directory);
        let cursor = parse_color_or_default(&config.cursor);
        let placeholder = parse_color_or_default(&config.placeholder);

        Self {
            fg,
            border_focused: Style::default().fg(border_focused),
            help: Style::default().fg(help),
            status_error: Style::default().fg(status_error),
            status_info: Style::default().fg(status_info),
            table_header: Style::default().fg(header_border).add_modifier(Modifier::UNDERLINED),
            selection: Style::default().fg(selection_fg).bg(selection_bg),
            directory: Style::default().fg(directory).add_modifier(Modifier::BOLD),
            cursor: Style::default().fg(cursor).add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(placeholder),
        }
    }
}

fn parse_color_or_default(s: &str) -> Color {
    match parse_color(s) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!("{e}; using terminal default");
            Color::Reset
        }
    }
}

/// Parse a color string into a ratatui `Color`.
///
/// Supported formats:
/// - `"#89b4fa"`: hex RGB
/// - `"rgb(137,180,250)"`: functional RGB
/// - `"69"`: ANSI 256-color palette index
/// - `"red"`, `"blue"`, etc.: named colors
/// - `"default"`: terminal default (`Color::Reset`)
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let index: u8 = s.parse().map_err(|_| anyhow::anyhow!("invalid palette color \"{s}\": expected 0-255"))?;
        return Ok(Color::Indexed(index));
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad red component"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad green component"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad blue component"))?;
        return Ok(Color::Rgb(r, g, b));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        }
        let r: u8 = parts[0].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad red value"))?;
        let g: u8 =
            parts[1].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad green value"))?;
        let b: u8 =
            parts[2].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad blue value"))?;
        return Ok(Color::Rgb(r, g, b));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "white" => Ok(Color::White),
        _ => anyhow::bail!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a palette index, a named color, or \"default\""
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#89b4fa").unwrap(), Color::Rgb(137, 180, 250));
        assert_eq!(parse_color("#000000").unwrap(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_color("rgb( 137 , 180 , 250 )").unwrap(), Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_parse_palette_index() {
        assert_eq!(parse_color("69").unwrap(), Color::Indexed(69));
        assert_eq!(parse_color("0").unwrap(), Color::Indexed(0));
        assert!(parse_color("256").is_err());
    }

    #[test]
    fn test_parse_named_and_default() {
        assert_eq!(parse_color("Blue").unwrap(), Color::Blue);
        assert_eq!(parse_color("default").unwrap(), Color::Reset);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_color("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_from_config_default_uses_palette_indices() {
        let theme = Theme::from_config(&ThemeConfig::default());
        assert_eq!(theme.border_focused, Style::default().fg(Color::Indexed(69)));
        assert_eq!(theme.help, Style::default().fg(Color::Indexed(241)));
        assert_eq!(theme.selection, Style::default().fg(Color::Indexed(229)).bg(Color::Indexed(57)));
        assert_eq!(theme.fg, Color::Reset);
    }

    #[test]
    fn test_invalid_config_color_falls_back_to_reset() {
        let config = ThemeConfig { help: "chartreuse-ish".into(), ..ThemeConfig::default() };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.help, Style::default().fg(Color::Reset));
    }
}
