use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub fg: String,
    #[serde(alias = "border-focused")]
    pub border_focused: String,
    pub help: String,
    #[serde(alias = "status-error")]
    pub status_error: String,
    #[serde(alias = "status-info")]
    pub status_info: String,
    #[serde(alias = "header-border")]
    pub header_border: String,
    #[serde(alias = "selection-fg")]
    pub selection_fg: String,
    #[serde(alias = "selection-bg")]
    pub selection_bg: String,
    pub directory: String,
    pub cursor: String,
    pub placeholder: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            fg: "default".into(),
            border_focused: "69".into(),
            help: "241".into(),
            status_error: "#f38ba8".into(),
            status_info: "#a6e3a1".into(),
            header_border: "240".into(),
            selection_fg: "229".into(),
            selection_bg: "57".into(),
            directory: "99".into(),
            cursor: "212".into(),
            placeholder: "240".into(),
        }
    }
}
