use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    #[serde(alias = "start-dir")]
    pub start_dir: String,
    #[serde(alias = "show-hidden")]
    pub show_hidden: bool,
    #[serde(alias = "preview-rows")]
    pub preview_rows: usize,
    #[serde(alias = "preview-columns")]
    pub preview_columns: usize,
    #[serde(alias = "log-file")]
    pub log_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            start_dir: String::new(),
            show_hidden: false,
            preview_rows: 5,
            preview_columns: 3,
            log_file: "debug.log".into(),
        }
    }
}

/// Fixed geometry shared by every panel, plus the text input's limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: u16,
    pub height: u16,
    #[serde(alias = "text-input-placeholder")]
    pub text_input_placeholder: String,
    #[serde(alias = "text-input-char-limit")]
    pub text_input_char_limit: usize,
    #[serde(alias = "text-input-width")]
    pub text_input_width: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 25,
            text_input_placeholder: "Pikachu".into(),
            text_input_char_limit: 156,
            text_input_width: 20,
        }
    }
}
