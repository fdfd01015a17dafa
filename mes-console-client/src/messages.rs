//! Action-type keyed notification templates.
//!
//! 消息模版：动作类型 → `{loading, success, error}` 文案，由固定的动词表
//! 和三个后缀一次性拼出，构造后只读。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const LOADING_SUFFIX: &str = "中...";
const SUCCESS_SUFFIX: &str = "成功";
const ERROR_SUFFIX: &str = "失败";

/// Semantic tag classifying an operation for message selection.
///
/// Unknown tags (e.g. from configuration or route metadata) resolve to
/// [`ActionType::Default`] via [`From<&str>`], so lookup never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Update,
    Delete,
    Reset,
    Distribution,
    Verify,
    Login,
    Print,
    Save,
    Set,
    Query,
    Return,
    Nc,
    Report,
    Download,
    #[default]
    #[serde(other)]
    Default,
}

impl ActionType {
    pub(crate) const ALL: [Self; 16] = [
        Self::Add,
        Self::Update,
        Self::Delete,
        Self::Reset,
        Self::Distribution,
        Self::Verify,
        Self::Login,
        Self::Print,
        Self::Save,
        Self::Set,
        Self::Query,
        Self::Return,
        Self::Nc,
        Self::Report,
        Self::Download,
        Self::Default,
    ];

    /// 动作动词，用于拼接三条文案。
    fn verb(self) -> &'static str {
        match self {
            Self::Add => "添加",
            Self::Update => "修改",
            Self::Delete => "删除",
            Self::Reset => "重置",
            Self::Distribution => "分配",
            Self::Verify => "验证",
            Self::Login => "登录",
            Self::Print => "打印",
            Self::Save => "保存",
            Self::Set => "设置",
            Self::Query => "查询",
            Self::Return => "退回",
            Self::Nc => "NC",
            Self::Report => "报工",
            Self::Download => "下载",
            Self::Default => "操作",
        }
    }
}

impl From<&str> for ActionType {
    /// Unknown tags fall back to [`ActionType::Default`]; this never fails.
    fn from(tag: &str) -> Self {
        match tag {
            "add" => Self::Add,
            "update" => Self::Update,
            "delete" => Self::Delete,
            "reset" => Self::Reset,
            "distribution" => Self::Distribution,
            "verify" => Self::Verify,
            "login" => Self::Login,
            "print" => Self::Print,
            "save" => Self::Save,
            "set" => Self::Set,
            "query" => Self::Query,
            "return" => Self::Return,
            "nc" => Self::Nc,
            "report" => Self::Report,
            "download" => Self::Download,
            _ => Self::Default,
        }
    }
}

/// One message triple for an action type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Shown while the operation is in flight.
    pub loading: String,
    /// Shown on business success.
    pub success: String,
    /// Shown on business failure.
    pub error: String,
}

/// Per-call wording override; a set field beats the catalog value, field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOverride {
    pub loading: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageOverride {
    /// Override only the error wording.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Override only the success wording.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Immutable action-type → template mapping, built once per client.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<ActionType, MessageTemplate>,
    fallback: MessageTemplate,
}

impl MessageCatalog {
    /// Derive one template per action type from the verb table.
    #[must_use]
    pub fn new() -> Self {
        let templates: HashMap<ActionType, MessageTemplate> = ActionType::ALL
            .iter()
            .map(|&action| {
                let verb = action.verb();
                let template = MessageTemplate {
                    loading: format!("{verb}{LOADING_SUFFIX}"),
                    success: format!("{verb}{SUCCESS_SUFFIX}"),
                    error: format!("{verb}{ERROR_SUFFIX}"),
                };
                (action, template)
            })
            .collect();
        let fallback = templates
            .get(&ActionType::Default)
            .cloned()
            .unwrap_or_else(|| MessageTemplate {
                loading: format!("操作{LOADING_SUFFIX}"),
                success: format!("操作{SUCCESS_SUFFIX}"),
                error: format!("操作{ERROR_SUFFIX}"),
            });
        Self {
            templates,
            fallback,
        }
    }

    /// Total lookup: every action type resolves, `Default` included.
    #[must_use]
    pub fn resolve(&self, action: ActionType) -> &MessageTemplate {
        self.templates.get(&action).unwrap_or(&self.fallback)
    }

    /// Merge a per-call override on top of the catalog template.
    #[must_use]
    pub fn resolve_merged(&self, action: ActionType, over: &MessageOverride) -> MessageTemplate {
        let base = self.resolve(action);
        MessageTemplate {
            loading: over
                .loading
                .clone()
                .unwrap_or_else(|| base.loading.clone()),
            success: over
                .success
                .clone()
                .unwrap_or_else(|| base.success.clone()),
            error: over.error.clone().unwrap_or_else(|| base.error.clone()),
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_action_type() {
        let catalog = MessageCatalog::new();
        for action in ActionType::ALL {
            let template = catalog.resolve(action);
            assert!(template.loading.ends_with("中..."));
            assert!(template.success.ends_with("成功"));
            assert!(template.error.ends_with("失败"));
        }
    }

    #[test]
    fn login_template_wording() {
        let catalog = MessageCatalog::new();
        let template = catalog.resolve(ActionType::Login);
        assert_eq!(template.loading, "登录中...");
        assert_eq!(template.success, "登录成功");
        assert_eq!(template.error, "登录失败");
    }

    #[test]
    fn unknown_tag_resolves_to_default_template() {
        let catalog = MessageCatalog::new();
        let bogus = catalog.resolve(ActionType::from("bogus-type"));
        let default = catalog.resolve(ActionType::Default);
        assert_eq!(bogus, default);
        assert_eq!(default.success, "操作成功");
    }

    #[test]
    fn known_tags_parse() {
        assert_eq!(ActionType::from("login"), ActionType::Login);
        assert_eq!(ActionType::from("nc"), ActionType::Nc);
        assert_eq!(ActionType::from("return"), ActionType::Return);
        assert_eq!(ActionType::from("default"), ActionType::Default);
    }

    #[test]
    fn override_wins_field_by_field() {
        let catalog = MessageCatalog::new();
        let over = MessageOverride::error("自定义失败提示");
        let merged = catalog.resolve_merged(ActionType::Save, &over);
        assert_eq!(merged.error, "自定义失败提示");
        // Untouched fields keep the catalog wording
        assert_eq!(merged.loading, "保存中...");
        assert_eq!(merged.success, "保存成功");
    }

    #[test]
    fn empty_override_keeps_catalog_values() {
        let catalog = MessageCatalog::new();
        let merged = catalog.resolve_merged(ActionType::Delete, &MessageOverride::default());
        assert_eq!(merged, *catalog.resolve(ActionType::Delete));
    }

    #[test]
    fn action_type_serde_lowercase() {
        let json = serde_json::to_string(&ActionType::Download).unwrap();
        assert_eq!(json, "\"download\"");
        let back: ActionType = serde_json::from_str("\"report\"").unwrap();
        assert_eq!(back, ActionType::Report);
        // Unknown wire values deserialize to Default
        let unknown: ActionType = serde_json::from_str("\"no-such-tag\"").unwrap();
        assert_eq!(unknown, ActionType::Default);
    }
}
