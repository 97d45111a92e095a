use serde::Deserialize;
use ts_rs::TS;

use super::entities::{PublicationSettings, ReviewFormQuestion};

// 创建期刊请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct CreateJournalRequest {
    pub title: String,
    pub short_name: String,
    pub description: Option<String>,
    pub issn: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub subject_areas: Vec<String>,
    pub editor_in_chief: Option<i64>,
    pub publication_settings: Option<PublicationSettings>,
    pub review_form_template: Option<Vec<ReviewFormQuestion>>,
}

// 更新期刊请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct UpdateJournalRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub issn: Option<String>,
    pub publisher: Option<String>,
    pub subject_areas: Option<Vec<String>>,
    pub editor_in_chief: Option<i64>,
    pub publication_settings: Option<PublicationSettings>,
    pub review_form_template: Option<Vec<ReviewFormQuestion>>,
    pub is_active: Option<bool>,
}

// 加入评审人名册请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct AddJournalReviewerRequest {
    pub account_id: i64,
    #[serde(default)]
    pub topics: Vec<String>,
}

// 任命副编辑请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct AddAssociateEditorRequest {
    pub account_id: i64,
}

// 期刊列表查询过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct JournalListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub subject_area: Option<String>,
    pub search: Option<String>,
}

// 可用评审人查询（按主题过滤）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct AvailableReviewersQuery {
    pub topics: Option<String>,
}
