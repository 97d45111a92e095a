use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 期刊评审人名册条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct JournalReviewer {
    pub account_id: i64,
    pub topics: Vec<String>,
    pub added_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

// 出版设置
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct PublicationSettings {
    pub min_reviewers_per_submission: i32,
    pub max_reviewers_per_submission: i32,
    pub review_deadline_days: i32,
    pub is_accepting_submissions: bool,
}

impl Default for PublicationSettings {
    fn default() -> Self {
        Self {
            min_reviewers_per_submission: 2,
            max_reviewers_per_submission: 3,
            review_deadline_days: 30,
            is_accepting_submissions: true,
        }
    }
}

// 评审表单模板中的一个问题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct ReviewFormQuestion {
    pub question_id: String,
    pub question_text: String,
    pub question_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

// 期刊实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct Journal {
    pub id: i64,
    pub title: String,
    // 短名称全局唯一，存储时统一为大写
    pub short_name: String,
    pub description: Option<String>,
    pub issn: Option<String>,
    pub publisher: Option<String>,
    pub subject_areas: Vec<String>,
    pub editor_in_chief: Option<i64>,
    pub associate_editors: Vec<i64>,
    pub reviewers: Vec<JournalReviewer>,
    pub publication_settings: PublicationSettings,
    pub review_form_template: Vec<ReviewFormQuestion>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Journal {
    pub fn active_reviewers(&self) -> Vec<&JournalReviewer> {
        self.reviewers.iter().filter(|r| r.is_active).collect()
    }

    pub fn has_reviewer(&self, account_id: i64) -> bool {
        self.reviewers.iter().any(|r| r.account_id == account_id)
    }

    pub fn is_editor(&self, account_id: i64) -> bool {
        self.editor_in_chief == Some(account_id) || self.associate_editors.contains(&account_id)
    }

    /// 把账号加入评审人名册；已存在则只更新 topics 并重新激活
    pub fn add_reviewer(&mut self, account_id: i64, topics: Vec<String>) {
        if let Some(existing) = self
            .reviewers
            .iter_mut()
            .find(|r| r.account_id == account_id)
        {
            existing.topics = topics;
            existing.is_active = true;
        } else {
            self.reviewers.push(JournalReviewer {
                account_id,
                topics,
                added_at: chrono::Utc::now(),
                is_active: true,
            });
        }
    }

    /// 从名册移除（软删除，保留历史记录）
    pub fn remove_reviewer(&mut self, account_id: i64) -> bool {
        match self
            .reviewers
            .iter_mut()
            .find(|r| r.account_id == account_id && r.is_active)
        {
            Some(reviewer) => {
                reviewer.is_active = false;
                true
            }
            None => false,
        }
    }

    pub fn add_associate_editor(&mut self, account_id: i64) {
        if !self.associate_editors.contains(&account_id) {
            self.associate_editors.push(account_id);
        }
    }

    pub fn remove_associate_editor(&mut self, account_id: i64) -> bool {
        let before = self.associate_editors.len();
        self.associate_editors.retain(|id| *id != account_id);
        self.associate_editors.len() != before
    }

    /// 名册里 topics 与给定主题有交集的在册评审人（topics 为空视为全领域）
    pub fn reviewer_ids_for_topics(&self, topics: &[String]) -> Vec<i64> {
        self.active_reviewers()
            .into_iter()
            .filter(|r| {
                r.topics.is_empty() || r.topics.iter().any(|t| topics.contains(t))
            })
            .map(|r| r.account_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn journal() -> Journal {
        Journal {
            id: 1,
            title: "Journal of Testing".into(),
            short_name: "JOT".into(),
            description: None,
            issn: None,
            publisher: None,
            subject_areas: vec![],
            editor_in_chief: Some(10),
            associate_editors: vec![11],
            reviewers: vec![],
            publication_settings: PublicationSettings::default(),
            review_form_template: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_reviewer_is_idempotent() {
        let mut j = journal();
        j.add_reviewer(20, vec!["ml".into()]);
        j.add_reviewer(20, vec!["systems".into()]);
        assert_eq!(j.reviewers.len(), 1);
        assert_eq!(j.reviewers[0].topics, vec!["systems".to_string()]);
    }

    #[test]
    fn test_remove_reviewer_keeps_history() {
        let mut j = journal();
        j.add_reviewer(20, vec![]);
        assert!(j.remove_reviewer(20));
        assert_eq!(j.reviewers.len(), 1);
        assert!(j.active_reviewers().is_empty());
        assert!(!j.remove_reviewer(20));

        // 重新加入时复用同一条记录
        j.add_reviewer(20, vec!["ml".into()]);
        assert_eq!(j.active_reviewers().len(), 1);
    }

    #[test]
    fn test_reviewer_ids_for_topics() {
        let mut j = journal();
        j.add_reviewer(20, vec!["ml".into()]);
        j.add_reviewer(21, vec!["systems".into()]);
        j.add_reviewer(22, vec![]); // 全领域

        let ids = j.reviewer_ids_for_topics(&["ml".to_string()]);
        assert_eq!(ids, vec![20, 22]);
    }

    #[test]
    fn test_is_editor() {
        let j = journal();
        assert!(j.is_editor(10));
        assert!(j.is_editor(11));
        assert!(!j.is_editor(12));
    }
}
