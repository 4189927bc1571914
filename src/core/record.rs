//! The model record stored in `llmModels`, keyed by `name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::core::avatars;

/// Model id used for both `model` and `name` in a fresh form.
pub const PLACEHOLDER_MODEL: &str = "gpt-3.5-turbo";

/// One entry of the `llmModels` array.
///
/// Missing keys fall back to the add-form defaults; keys this editor does not know
/// are kept in `extra` and written back as they were.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelRecord {
    pub model: String,
    pub name: String,
    pub avatar: String,
    pub max_context: i64,
    pub max_response: i64,
    pub quote_max_token: i64,
    pub max_temperature: f64,
    /// Integer or float, kept exactly as written.
    pub chars_points_price: Number,
    pub censor: bool,
    pub vision: bool,
    pub dataset_process: bool,
    pub used_in_classify: bool,
    pub used_in_extract_fields: bool,
    pub used_in_tool_call: bool,
    pub used_in_query_extension: bool,
    pub tool_choice: bool,
    pub function_call: bool,
    #[serde(rename = "customCQPrompt")]
    pub custom_cq_prompt: String,
    pub custom_extract_prompt: String,
    pub default_system_chat_prompt: String,
    /// Extra request parameters sent with every call (e.g. GLM4 `top_p`).
    pub default_config: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ModelRecord {
    fn default() -> Self {
        Self {
            model: PLACEHOLDER_MODEL.to_string(),
            name: PLACEHOLDER_MODEL.to_string(),
            avatar: avatars::resolve(avatars::default_icon()),
            max_context: 16000,
            max_response: 4000,
            quote_max_token: 13000,
            max_temperature: 1.2,
            chars_points_price: Number::from(0),
            censor: false,
            vision: false,
            dataset_process: true,
            used_in_classify: true,
            used_in_extract_fields: true,
            used_in_tool_call: true,
            used_in_query_extension: true,
            tool_choice: true,
            function_call: false,
            custom_cq_prompt: String::new(),
            custom_extract_prompt: String::new(),
            default_system_chat_prompt: String::new(),
            default_config: Map::new(),
            extra: Map::new(),
        }
    }
}

/// Field labels in display order. Shared by the detail table, the forms and `show`.
pub const LABELS: [&str; 21] = [
    "Model ID",
    "Alias (name)",
    "Logo URL",
    "Max context",
    "Max response",
    "Max quote tokens",
    "Max temperature",
    "Points / 1k tokens",
    "Content censor",
    "Image input",
    "Dataset processing",
    "Question classify",
    "Field extraction",
    "Tool calling",
    "Query extension",
    "Tool choice",
    "Function call",
    "Custom classify prompt",
    "Custom extract prompt",
    "Default system prompt",
    "Default config",
];

fn yes_no(b: bool) -> String {
    if b { "yes" } else { "no" }.to_string()
}

impl ModelRecord {
    /// Label/value pairs for every field, in [`LABELS`] order.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.model.clone(),
            self.name.clone(),
            self.avatar.clone(),
            self.max_context.to_string(),
            self.max_response.to_string(),
            self.quote_max_token.to_string(),
            self.max_temperature.to_string(),
            self.chars_points_price.to_string(),
            yes_no(self.censor),
            yes_no(self.vision),
            yes_no(self.dataset_process),
            yes_no(self.used_in_classify),
            yes_no(self.used_in_extract_fields),
            yes_no(self.used_in_tool_call),
            yes_no(self.used_in_query_extension),
            yes_no(self.tool_choice),
            yes_no(self.function_call),
            self.custom_cq_prompt.clone(),
            self.custom_extract_prompt.clone(),
            self.default_system_chat_prompt.clone(),
            Value::Object(self.default_config.clone()).to_string(),
        ];
        LABELS.into_iter().zip(values).collect()
    }
}
