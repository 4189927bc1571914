//! Add/edit form: one input per record field, coerced back into a [`ModelRecord`].

use serde_json::{Map, Number, Value};

use crate::core::avatars;
use crate::core::record::{LABELS, ModelRecord};

/// Record field behind a form input, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Model,
    Name,
    Avatar,
    MaxContext,
    MaxResponse,
    QuoteMaxToken,
    MaxTemperature,
    CharsPointsPrice,
    Censor,
    Vision,
    DatasetProcess,
    UsedInClassify,
    UsedInExtractFields,
    UsedInToolCall,
    UsedInQueryExtension,
    ToolChoice,
    FunctionCall,
    CustomCqPrompt,
    CustomExtractPrompt,
    DefaultSystemChatPrompt,
    DefaultConfig,
}

impl FieldKey {
    pub const ALL: [FieldKey; 21] = [
        FieldKey::Model,
        FieldKey::Name,
        FieldKey::Avatar,
        FieldKey::MaxContext,
        FieldKey::MaxResponse,
        FieldKey::QuoteMaxToken,
        FieldKey::MaxTemperature,
        FieldKey::CharsPointsPrice,
        FieldKey::Censor,
        FieldKey::Vision,
        FieldKey::DatasetProcess,
        FieldKey::UsedInClassify,
        FieldKey::UsedInExtractFields,
        FieldKey::UsedInToolCall,
        FieldKey::UsedInQueryExtension,
        FieldKey::ToolChoice,
        FieldKey::FunctionCall,
        FieldKey::CustomCqPrompt,
        FieldKey::CustomExtractPrompt,
        FieldKey::DefaultSystemChatPrompt,
        FieldKey::DefaultConfig,
    ];

    pub fn label(self) -> &'static str {
        // ALL and LABELS share the same order.
        let idx = FieldKey::ALL.iter().position(|k| *k == self).unwrap_or(0);
        LABELS[idx]
    }
}

/// Current value of an input.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text; numeric and JSON fields are parsed on submit.
    Text(String),
    Flag(bool),
    /// Index into the avatar icon table.
    Icon(usize),
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub key: FieldKey,
    pub value: FieldValue,
}

#[derive(Clone, Debug)]
pub enum FormMode {
    Add,
    Edit {
        /// Record as loaded; fields the form does not show are carried over from it.
        original: ModelRecord,
    },
}

/// State for the add/edit popup.
#[derive(Clone, Debug)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
}

fn field_value(record: &ModelRecord, key: FieldKey) -> FieldValue {
    let text = match key {
        FieldKey::Model => record.model.clone(),
        FieldKey::Name => record.name.clone(),
        FieldKey::Avatar => record.avatar.clone(),
        FieldKey::MaxContext => record.max_context.to_string(),
        FieldKey::MaxResponse => record.max_response.to_string(),
        FieldKey::QuoteMaxToken => record.quote_max_token.to_string(),
        FieldKey::MaxTemperature => record.max_temperature.to_string(),
        FieldKey::CharsPointsPrice => record.chars_points_price.to_string(),
        FieldKey::CustomCqPrompt => record.custom_cq_prompt.clone(),
        FieldKey::CustomExtractPrompt => record.custom_extract_prompt.clone(),
        FieldKey::DefaultSystemChatPrompt => record.default_system_chat_prompt.clone(),
        FieldKey::DefaultConfig => Value::Object(record.default_config.clone()).to_string(),
        FieldKey::Censor => return FieldValue::Flag(record.censor),
        FieldKey::Vision => return FieldValue::Flag(record.vision),
        FieldKey::DatasetProcess => return FieldValue::Flag(record.dataset_process),
        FieldKey::UsedInClassify => return FieldValue::Flag(record.used_in_classify),
        FieldKey::UsedInExtractFields => return FieldValue::Flag(record.used_in_extract_fields),
        FieldKey::UsedInToolCall => return FieldValue::Flag(record.used_in_tool_call),
        FieldKey::UsedInQueryExtension => {
            return FieldValue::Flag(record.used_in_query_extension);
        }
        FieldKey::ToolChoice => return FieldValue::Flag(record.tool_choice),
        FieldKey::FunctionCall => return FieldValue::Flag(record.function_call),
    };
    FieldValue::Text(text)
}

fn parse_int(label: &str, s: &str) -> Result<i64, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("{}: '{}' is not an integer", label, s.trim()))
}

fn parse_float(label: &str, s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| format!("{}: '{}' is not a number", label, s.trim()))
}

fn parse_number(label: &str, s: &str) -> Result<Number, String> {
    let t = s.trim();
    if let Ok(i) = t.parse::<i64>() {
        return Ok(Number::from(i));
    }
    parse_float(label, t).and_then(|f| {
        Number::from_f64(f).ok_or_else(|| format!("{}: '{}' is not a number", label, t))
    })
}

fn parse_object(label: &str, s: &str) -> Result<Map<String, Value>, String> {
    if s.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(format!("{}: expected a JSON object", label)),
        Err(e) => Err(format!("{}: {}", label, e)),
    }
}

impl FormState {
    /// Blank form with the add defaults; the avatar is picked from the icon table.
    pub fn add() -> Self {
        let defaults = ModelRecord::default();
        let fields = FieldKey::ALL
            .into_iter()
            .map(|key| FormField {
                key,
                value: if key == FieldKey::Avatar {
                    FieldValue::Icon(avatars::default_index())
                } else {
                    field_value(&defaults, key)
                },
            })
            .collect();
        Self {
            mode: FormMode::Add,
            fields,
            focused: 0,
            error: None,
        }
    }

    /// Form pre-populated from an existing record. The avatar is an icon selector when
    /// the stored path names a known icon, free text otherwise.
    pub fn edit(record: &ModelRecord) -> Self {
        let fields = FieldKey::ALL
            .into_iter()
            .map(|key| FormField {
                key,
                value: match avatars::icon_for_path(&record.avatar) {
                    Some(idx) if key == FieldKey::Avatar => FieldValue::Icon(idx),
                    _ => field_value(record, key),
                },
            })
            .collect();
        Self {
            mode: FormMode::Edit {
                original: record.clone(),
            },
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => " Add or update model ",
            FormMode::Edit { .. } => " Edit model ",
        }
    }

    /// Name of the record being edited (target of the form's delete action).
    pub fn original_name(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { original } => Some(original.name.as_str()),
            FormMode::Add => None,
        }
    }

    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Type a character into the focused text input. Space toggles checkboxes and
    /// cycles the icon selector.
    pub fn insert_char(&mut self, c: char) {
        self.error = None;
        let toggles = match &mut self.fields[self.focused].value {
            FieldValue::Text(s) => {
                s.push(c);
                false
            }
            FieldValue::Flag(_) | FieldValue::Icon(_) => c == ' ',
        };
        if toggles {
            self.toggle();
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        if let FieldValue::Text(s) = &mut self.fields[self.focused].value {
            s.pop();
        }
    }

    pub fn clear_field(&mut self) {
        self.error = None;
        if let FieldValue::Text(s) = &mut self.fields[self.focused].value {
            s.clear();
        }
    }

    /// Flip a checkbox or advance the icon selector.
    pub fn toggle(&mut self) {
        self.cycle(1);
    }

    /// Step the icon selector (or flip a checkbox) by `delta`.
    pub fn cycle(&mut self, delta: isize) {
        self.error = None;
        let len = avatars::icons().len() as isize;
        match &mut self.fields[self.focused].value {
            FieldValue::Flag(b) => *b = !*b,
            FieldValue::Icon(i) => *i = (*i as isize + delta).rem_euclid(len) as usize,
            FieldValue::Text(_) => {}
        }
    }

    /// Coerce inputs into a record. Errors name the offending field.
    pub fn to_record(&self) -> Result<ModelRecord, String> {
        let mut record = match &self.mode {
            FormMode::Edit { original } => original.clone(),
            FormMode::Add => ModelRecord::default(),
        };
        for field in &self.fields {
            let label = field.key.label();
            match (&field.value, field.key) {
                (FieldValue::Icon(i), FieldKey::Avatar) => {
                    let id = avatars::icons()
                        .get(*i)
                        .map(String::as_str)
                        .unwrap_or(avatars::default_icon());
                    record.avatar = avatars::resolve(id);
                }
                (FieldValue::Flag(b), key) => {
                    let b = *b;
                    match key {
                        FieldKey::Censor => record.censor = b,
                        FieldKey::Vision => record.vision = b,
                        FieldKey::DatasetProcess => record.dataset_process = b,
                        FieldKey::UsedInClassify => record.used_in_classify = b,
                        FieldKey::UsedInExtractFields => record.used_in_extract_fields = b,
                        FieldKey::UsedInToolCall => record.used_in_tool_call = b,
                        FieldKey::UsedInQueryExtension => record.used_in_query_extension = b,
                        FieldKey::ToolChoice => record.tool_choice = b,
                        FieldKey::FunctionCall => record.function_call = b,
                        _ => {}
                    }
                }
                (FieldValue::Text(s), key) => match key {
                    FieldKey::Model => record.model = s.clone(),
                    FieldKey::Name => record.name = s.trim().to_string(),
                    FieldKey::Avatar => record.avatar = s.clone(),
                    FieldKey::MaxContext => record.max_context = parse_int(label, s)?,
                    FieldKey::MaxResponse => record.max_response = parse_int(label, s)?,
                    FieldKey::QuoteMaxToken => record.quote_max_token = parse_int(label, s)?,
                    FieldKey::MaxTemperature => record.max_temperature = parse_float(label, s)?,
                    FieldKey::CharsPointsPrice => {
                        record.chars_points_price = parse_number(label, s)?;
                    }
                    FieldKey::CustomCqPrompt => record.custom_cq_prompt = s.clone(),
                    FieldKey::CustomExtractPrompt => record.custom_extract_prompt = s.clone(),
                    FieldKey::DefaultSystemChatPrompt => {
                        record.default_system_chat_prompt = s.clone();
                    }
                    FieldKey::DefaultConfig => record.default_config = parse_object(label, s)?,
                    _ => {}
                },
                (FieldValue::Icon(_), _) => {}
            }
        }
        if record.name.is_empty() {
            return Err(format!("{} cannot be empty", FieldKey::Name.label()));
        }
        Ok(record)
    }
}
