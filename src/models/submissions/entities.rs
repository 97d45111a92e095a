use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 投稿生命周期状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted,
    UnderDeskReview,
    DeskRejected,
    UnderReview,
    ReviewCompleted,
    AwaitingEditorDecision,
    DecisionMade,
    RevisionRequested,
    RevisionSubmitted,
    Accepted,
    Rejected,
    Withdrawn,
    Published,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::UnderDeskReview => "under_desk_review",
            SubmissionStatus::DeskRejected => "desk_rejected",
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::ReviewCompleted => "review_completed",
            SubmissionStatus::AwaitingEditorDecision => "awaiting_editor_decision",
            SubmissionStatus::DecisionMade => "decision_made",
            SubmissionStatus::RevisionRequested => "revision_requested",
            SubmissionStatus::RevisionSubmitted => "revision_submitted",
            SubmissionStatus::Accepted => "accepted",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::Withdrawn => "withdrawn",
            SubmissionStatus::Published => "published",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use SubmissionStatus::*;
        match s {
            "submitted" => Ok(Submitted),
            "under_desk_review" => Ok(UnderDeskReview),
            "desk_rejected" => Ok(DeskRejected),
            "under_review" => Ok(UnderReview),
            "review_completed" => Ok(ReviewCompleted),
            "awaiting_editor_decision" => Ok(AwaitingEditorDecision),
            "decision_made" => Ok(DecisionMade),
            "revision_requested" => Ok(RevisionRequested),
            "revision_submitted" => Ok(RevisionSubmitted),
            "accepted" => Ok(Accepted),
            "rejected" => Ok(Rejected),
            "withdrawn" => Ok(Withdrawn),
            "published" => Ok(Published),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

impl SubmissionStatus {
    /// 状态机：每个状态允许的后继状态
    pub fn allowed_transitions(&self) -> &'static [SubmissionStatus] {
        use SubmissionStatus::*;
        match self {
            Submitted => &[UnderDeskReview, DeskRejected, UnderReview, Withdrawn],
            UnderDeskReview => &[DeskRejected, UnderReview, Withdrawn],
            UnderReview => &[ReviewCompleted, Withdrawn],
            ReviewCompleted => &[AwaitingEditorDecision, Withdrawn],
            AwaitingEditorDecision => &[DecisionMade, Withdrawn],
            DecisionMade => &[RevisionRequested, Accepted, Rejected, Withdrawn],
            RevisionRequested => &[RevisionSubmitted, Withdrawn],
            RevisionSubmitted => &[UnderReview, AwaitingEditorDecision, Withdrawn],
            Accepted => &[Published],
            // 终止状态
            DeskRejected | Rejected | Withdrawn | Published => &[],
        }
    }

    pub fn can_transition_to(&self, next: SubmissionStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

// 作者条目（可以不对应系统账号）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionAuthor {
    pub name: String,
    pub email: String,
    pub affiliation: Option<String>,
    pub account_id: Option<i64>,
    #[serde(default)]
    pub is_corresponding: bool,
}

// 投稿目标场所类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum VenueType {
    Journal,
    Conference,
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VenueType::Journal => write!(f, "journal"),
            VenueType::Conference => write!(f, "conference"),
        }
    }
}

impl std::str::FromStr for VenueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(VenueType::Journal),
            "conference" => Ok(VenueType::Conference),
            _ => Err(format!("Invalid venue type: {s}")),
        }
    }
}

// 评审邀请状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum AssignmentStatus {
    Invited,
    Accepted,
    Declined,
    Completed,
    Withdrawn,
}

impl AssignmentStatus {
    // 活跃指仍占用评审名额
    pub fn is_active(&self) -> bool {
        matches!(self, AssignmentStatus::Invited | AssignmentStatus::Accepted)
    }
}

// 一条评审指派记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ReviewAssignment {
    pub assignment_id: String,
    pub reviewer_id: i64,
    pub status: AssignmentStatus,
    pub invited_at: chrono::DateTime<chrono::Utc>,
    pub responded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 编辑决定
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum EditorialDecision {
    Accept,
    AcceptWithMinorRevisions,
    ReviseAndResubmit,
    Reject,
}

// 编辑决定记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct DecisionRecord {
    pub decision: EditorialDecision,
    pub decided_by: i64,
    pub comments: Option<String>,
    pub decided_at: chrono::DateTime<chrono::Utc>,
}

// 状态变更历史条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StatusChange {
    pub from: SubmissionStatus,
    pub to: SubmissionStatus,
    pub changed_by: i64,
    pub changed_at: chrono::DateTime<chrono::Utc>,
    pub note: Option<String>,
}

// 投稿实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    // 形如 SUB-2026-0042 的业务编号，全局唯一
    pub submission_code: String,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub venue_type: VenueType,
    pub venue_id: i64,
    pub track: Option<String>,
    pub authors: Vec<SubmissionAuthor>,
    pub submitted_by: i64,
    pub assigned_editor: Option<i64>,
    pub status: SubmissionStatus,
    pub status_history: Vec<StatusChange>,
    pub review_assignments: Vec<ReviewAssignment>,
    pub decision: Option<DecisionRecord>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    pub fn corresponding_author(&self) -> Option<&SubmissionAuthor> {
        self.authors.iter().find(|a| a.is_corresponding)
    }

    pub fn is_author(&self, account_id: i64) -> bool {
        self.submitted_by == account_id
            || self.authors.iter().any(|a| a.account_id == Some(account_id))
    }

    /// 按状态机推进状态，非法转移返回 false 且不做任何修改
    pub fn transition_to(
        &mut self,
        next: SubmissionStatus,
        changed_by: i64,
        note: Option<String>,
    ) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status_history.push(StatusChange {
            from: self.status,
            to: next,
            changed_by,
            changed_at: chrono::Utc::now(),
            note,
        });
        self.status = next;
        true
    }

    pub fn assignment_for(&self, reviewer_id: i64) -> Option<&ReviewAssignment> {
        self.review_assignments
            .iter()
            .find(|a| a.reviewer_id == reviewer_id && a.status.is_active())
    }

    pub fn assignment_by_id_mut(&mut self, assignment_id: &str) -> Option<&mut ReviewAssignment> {
        self.review_assignments
            .iter_mut()
            .find(|a| a.assignment_id == assignment_id)
    }

    /// 仍占用评审名额的指派数（invited + accepted）
    pub fn active_assignment_count(&self) -> usize {
        self.review_assignments
            .iter()
            .filter(|a| a.status.is_active())
            .count()
    }

    pub fn completed_assignment_count(&self) -> usize {
        self.review_assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission(status: SubmissionStatus) -> Submission {
        Submission {
            id: 1,
            submission_code: "SUB-2026-0042".into(),
            title: "On Testing".into(),
            abstract_text: "A study.".into(),
            keywords: vec![],
            venue_type: VenueType::Journal,
            venue_id: 1,
            track: None,
            authors: vec![SubmissionAuthor {
                name: "Jo Li".into(),
                email: "jo@example.com".into(),
                affiliation: None,
                account_id: Some(5),
                is_corresponding: true,
            }],
            submitted_by: 5,
            assigned_editor: None,
            status,
            status_history: vec![],
            review_assignments: vec![],
            decision: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        use SubmissionStatus::*;
        for status in [DeskRejected, Rejected, Withdrawn, Published] {
            assert!(status.is_terminal(), "{status} should be terminal");
        }
        assert!(!Accepted.is_terminal());
    }

    #[test]
    fn test_accepted_can_only_be_published() {
        use SubmissionStatus::*;
        assert!(Accepted.can_transition_to(Published));
        assert!(!Accepted.can_transition_to(Withdrawn));
        assert!(!Accepted.can_transition_to(Rejected));
    }

    #[test]
    fn test_revision_loop() {
        use SubmissionStatus::*;
        assert!(DecisionMade.can_transition_to(RevisionRequested));
        assert!(RevisionRequested.can_transition_to(RevisionSubmitted));
        assert!(RevisionSubmitted.can_transition_to(UnderReview));
        assert!(RevisionSubmitted.can_transition_to(AwaitingEditorDecision));
        assert!(!RevisionSubmitted.can_transition_to(Accepted));
    }

    #[test]
    fn test_transition_records_history() {
        let mut s = submission(SubmissionStatus::Submitted);
        assert!(s.transition_to(SubmissionStatus::UnderReview, 9, None));
        assert_eq!(s.status, SubmissionStatus::UnderReview);
        assert_eq!(s.status_history.len(), 1);
        assert_eq!(s.status_history[0].from, SubmissionStatus::Submitted);

        // 非法转移不改状态也不记历史
        assert!(!s.transition_to(SubmissionStatus::Published, 9, None));
        assert_eq!(s.status, SubmissionStatus::UnderReview);
        assert_eq!(s.status_history.len(), 1);
    }

    #[test]
    fn test_assignment_counters_ignore_declined() {
        let mut s = submission(SubmissionStatus::UnderReview);
        let now = Utc::now();
        for (id, status) in [
            ("a1", AssignmentStatus::Invited),
            ("a2", AssignmentStatus::Accepted),
            ("a3", AssignmentStatus::Declined),
            ("a4", AssignmentStatus::Completed),
        ] {
            s.review_assignments.push(ReviewAssignment {
                assignment_id: id.into(),
                reviewer_id: 100,
                status,
                invited_at: now,
                responded_at: None,
                due_at: None,
                completed_at: None,
            });
        }
        assert_eq!(s.active_assignment_count(), 2);
        assert_eq!(s.completed_assignment_count(), 1);
    }

    #[test]
    fn test_is_author_covers_submitter_and_linked_authors() {
        let s = submission(SubmissionStatus::Submitted);
        assert!(s.is_author(5));
        assert!(!s.is_author(6));
    }
}
