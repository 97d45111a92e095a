use serde::Deserialize;
use ts_rs::TS;

use super::entities::{FormResponse, OverallAssessment, ReviewRatings, ReviewStatus};

// 保存评审草稿请求（部分更新）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct UpdateReviewRequest {
    pub responses: Option<Vec<FormResponse>>,
    pub assessment: Option<OverallAssessment>,
    pub ratings: Option<ReviewRatings>,
}

// 撤回评审请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct WithdrawReviewRequest {
    pub reason: Option<String>,
}

// 存储层创建评审草稿的数据（评审人接受邀请时生成）
#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub submission_id: i64,
    pub assignment_id: String,
    pub reviewer_id: i64,
}

// 评审列表查询过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ReviewStatus>,
    pub submission_id: Option<i64>,
}
