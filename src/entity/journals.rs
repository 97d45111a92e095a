//! 期刊实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(unique)]
    pub short_name: String,
    pub description: Option<String>,
    pub issn: Option<String>,
    pub publisher: Option<String>,
    // JSON: Vec<String>
    pub subject_areas: String,
    pub editor_in_chief: Option<i64>,
    // JSON: Vec<i64>
    pub associate_editors: String,
    // JSON: Vec<JournalReviewer>
    pub reviewers: String,
    // JSON: PublicationSettings
    pub publication_settings: String,
    // JSON: Vec<ReviewFormQuestion>
    pub review_form_template: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_journal(self) -> crate::models::journals::entities::Journal {
        use crate::models::journals::entities::Journal;
        use chrono::{DateTime, Utc};

        Journal {
            id: self.id,
            title: self.title,
            short_name: self.short_name,
            description: self.description,
            issn: self.issn,
            publisher: self.publisher,
            subject_areas: serde_json::from_str(&self.subject_areas).unwrap_or_default(),
            editor_in_chief: self.editor_in_chief,
            associate_editors: serde_json::from_str(&self.associate_editors).unwrap_or_default(),
            reviewers: serde_json::from_str(&self.reviewers).unwrap_or_default(),
            publication_settings: serde_json::from_str(&self.publication_settings)
                .unwrap_or_default(),
            review_form_template: serde_json::from_str(&self.review_form_template)
                .unwrap_or_default(),
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
