//! Purpose flags: which downstream uses a record is eligible for.
//!
//! Deployments expect at least one model per purpose. This is reported as a hint only.

use crate::core::record::ModelRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeFlag {
    DatasetProcess,
    Classify,
    ExtractFields,
    ToolCall,
    QueryExtension,
    ToolChoice,
}

impl PurposeFlag {
    pub const ALL: [PurposeFlag; 6] = [
        PurposeFlag::DatasetProcess,
        PurposeFlag::Classify,
        PurposeFlag::ExtractFields,
        PurposeFlag::ToolCall,
        PurposeFlag::QueryExtension,
        PurposeFlag::ToolChoice,
    ];

    /// JSON key of the flag in a record.
    pub fn key(self) -> &'static str {
        match self {
            PurposeFlag::DatasetProcess => "datasetProcess",
            PurposeFlag::Classify => "usedInClassify",
            PurposeFlag::ExtractFields => "usedInExtractFields",
            PurposeFlag::ToolCall => "usedInToolCall",
            PurposeFlag::QueryExtension => "usedInQueryExtension",
            PurposeFlag::ToolChoice => "toolChoice",
        }
    }

    pub fn is_set(self, record: &ModelRecord) -> bool {
        match self {
            PurposeFlag::DatasetProcess => record.dataset_process,
            PurposeFlag::Classify => record.used_in_classify,
            PurposeFlag::ExtractFields => record.used_in_extract_fields,
            PurposeFlag::ToolCall => record.used_in_tool_call,
            PurposeFlag::QueryExtension => record.used_in_query_extension,
            PurposeFlag::ToolChoice => record.tool_choice,
        }
    }
}

/// Flags no record enables. Empty for an empty list.
pub fn missing(models: &[ModelRecord]) -> Vec<PurposeFlag> {
    if models.is_empty() {
        return vec![];
    }
    PurposeFlag::ALL
        .into_iter()
        .filter(|flag| !models.iter().any(|m| flag.is_set(m)))
        .collect()
}

/// Compact flag summary for listings, e.g. `DCE-QS` with `-` for unset flags.
pub fn summary(record: &ModelRecord) -> String {
    const LETTERS: [char; 6] = ['D', 'C', 'E', 'T', 'Q', 'S'];
    PurposeFlag::ALL
        .into_iter()
        .zip(LETTERS)
        .map(|(flag, c)| if flag.is_set(record) { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_hints() {
        assert!(missing(&[]).is_empty());
    }

    #[test]
    fn defaults_cover_every_purpose() {
        assert!(missing(&[ModelRecord::default()]).is_empty());
    }

    #[test]
    fn reports_flags_no_record_sets() {
        let mut a = ModelRecord::default();
        a.used_in_classify = false;
        a.tool_choice = false;
        let mut b = ModelRecord::default();
        b.name = "b".to_string();
        b.used_in_classify = false;
        let out = missing(&[a, b]);
        assert_eq!(out, vec![PurposeFlag::Classify]);
        assert_eq!(out[0].key(), "usedInClassify");
    }

    #[test]
    fn summary_marks_unset_flags() {
        let mut r = ModelRecord::default();
        assert_eq!(summary(&r), "DCETQS");
        r.used_in_tool_call = false;
        assert_eq!(summary(&r), "DCE-QS");
    }
}
