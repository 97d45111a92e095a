use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 会议类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub enum ConferenceType {
    Conference,
    Workshop,
    Symposium,
}

impl std::fmt::Display for ConferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConferenceType::Conference => write!(f, "conference"),
            ConferenceType::Workshop => write!(f, "workshop"),
            ConferenceType::Symposium => write!(f, "symposium"),
        }
    }
}

impl std::str::FromStr for ConferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conference" => Ok(ConferenceType::Conference),
            "workshop" => Ok(ConferenceType::Workshop),
            "symposium" => Ok(ConferenceType::Symposium),
            _ => Err(format!("Invalid conference type: {s}")),
        }
    }
}

// 会议生命周期状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub enum ConferenceStatus {
    Planned,
    OpenForSubmissions,
    InReview,
    DecisionsSent,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ConferenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConferenceStatus::Planned => "planned",
            ConferenceStatus::OpenForSubmissions => "open_for_submissions",
            ConferenceStatus::InReview => "in_review",
            ConferenceStatus::DecisionsSent => "decisions_sent",
            ConferenceStatus::Completed => "completed",
            ConferenceStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ConferenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ConferenceStatus::Planned),
            "open_for_submissions" => Ok(ConferenceStatus::OpenForSubmissions),
            "in_review" => Ok(ConferenceStatus::InReview),
            "decisions_sent" => Ok(ConferenceStatus::DecisionsSent),
            "completed" => Ok(ConferenceStatus::Completed),
            "cancelled" => Ok(ConferenceStatus::Cancelled),
            _ => Err(format!("Invalid conference status: {s}")),
        }
    }
}

// 程序委员会成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct CommitteeMember {
    pub account_id: i64,
    pub role: CommitteeRole,
    pub added_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub enum CommitteeRole {
    Member,
    SeniorMember,
    AreaChair,
}

// 会议分会场/track
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceTrack {
    pub name: String,
    pub description: Option<String>,
    pub track_chair: Option<i64>,
}

// 会议地点
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceLocation {
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

// 会议实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct Conference {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub conference_type: ConferenceType,
    pub description: Option<String>,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    pub submission_deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub review_deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub notification_date: Option<chrono::DateTime<chrono::Utc>>,
    pub location: ConferenceLocation,
    pub status: ConferenceStatus,
    pub chair: Option<i64>,
    pub program_committee: Vec<CommitteeMember>,
    pub tracks: Vec<ConferenceTrack>,
    pub min_reviewers_per_submission: i32,
    pub max_reviewers_per_submission: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Conference {
    /// 只有处于开放状态且未过投稿截止日期才接受投稿
    pub fn is_accepting_submissions(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        if self.status != ConferenceStatus::OpenForSubmissions {
            return false;
        }
        match self.submission_deadline {
            Some(deadline) => now <= deadline,
            None => true,
        }
    }

    pub fn is_committee_member(&self, account_id: i64) -> bool {
        self.program_committee
            .iter()
            .any(|m| m.account_id == account_id)
    }

    /// 加入程序委员会；已存在则只更新角色
    pub fn add_committee_member(&mut self, account_id: i64, role: CommitteeRole) {
        if let Some(existing) = self
            .program_committee
            .iter_mut()
            .find(|m| m.account_id == account_id)
        {
            existing.role = role;
        } else {
            self.program_committee.push(CommitteeMember {
                account_id,
                role,
                added_at: chrono::Utc::now(),
            });
        }
    }

    pub fn remove_committee_member(&mut self, account_id: i64) -> bool {
        let before = self.program_committee.len();
        self.program_committee.retain(|m| m.account_id != account_id);
        self.program_committee.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn conference(status: ConferenceStatus) -> Conference {
        Conference {
            id: 1,
            name: "Conference on Testing".into(),
            short_name: "COT-2026".into(),
            conference_type: ConferenceType::Conference,
            description: None,
            start_date: None,
            end_date: None,
            submission_deadline: Some(Utc::now() + Duration::days(7)),
            review_deadline: None,
            notification_date: None,
            location: ConferenceLocation::default(),
            status,
            chair: Some(10),
            program_committee: vec![],
            tracks: vec![],
            min_reviewers_per_submission: 2,
            max_reviewers_per_submission: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accepting_requires_open_status() {
        let now = Utc::now();
        assert!(conference(ConferenceStatus::OpenForSubmissions).is_accepting_submissions(now));
        assert!(!conference(ConferenceStatus::Planned).is_accepting_submissions(now));
        assert!(!conference(ConferenceStatus::InReview).is_accepting_submissions(now));
    }

    #[test]
    fn test_accepting_respects_deadline() {
        let mut c = conference(ConferenceStatus::OpenForSubmissions);
        let now = Utc::now();
        c.submission_deadline = Some(now - Duration::hours(1));
        assert!(!c.is_accepting_submissions(now));
        c.submission_deadline = None;
        assert!(c.is_accepting_submissions(now));
    }

    #[test]
    fn test_committee_membership_updates_role() {
        let mut c = conference(ConferenceStatus::Planned);
        c.add_committee_member(20, CommitteeRole::Member);
        c.add_committee_member(20, CommitteeRole::AreaChair);
        assert_eq!(c.program_committee.len(), 1);
        assert_eq!(c.program_committee[0].role, CommitteeRole::AreaChair);
        assert!(c.remove_committee_member(20));
        assert!(!c.remove_committee_member(20));
    }
}
