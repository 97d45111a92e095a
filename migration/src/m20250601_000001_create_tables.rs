use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建账号表
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::FirstName).string().not_null())
                    .col(ColumnDef::new(Accounts::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::SecondaryEmail).string().null())
                    .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Accounts::AccountType).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::MembershipStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::MembershipExpiry)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Accounts::Profile).text().not_null())
                    .col(
                        ColumnDef::new(Accounts::TopicsOfInterest)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsReviewer)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Accounts::ReviewerStatus).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::ReviewerAvailability)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Accounts::Roles).text().not_null())
                    .col(ColumnDef::new(Accounts::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Accounts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Accounts::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建期刊表
        manager
            .create_table(
                Table::create()
                    .table(Journals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Journals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Journals::Title).string().not_null())
                    .col(
                        ColumnDef::new(Journals::ShortName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Journals::Description).text().null())
                    .col(ColumnDef::new(Journals::Issn).string().null())
                    .col(ColumnDef::new(Journals::Publisher).string().null())
                    .col(ColumnDef::new(Journals::SubjectAreas).text().not_null())
                    .col(ColumnDef::new(Journals::EditorInChief).big_integer().null())
                    .col(
                        ColumnDef::new(Journals::AssociateEditors)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Journals::Reviewers).text().not_null())
                    .col(
                        ColumnDef::new(Journals::PublicationSettings)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Journals::ReviewFormTemplate)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Journals::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Journals::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Journals::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建会议表
        manager
            .create_table(
                Table::create()
                    .table(Conferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conferences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conferences::Name).string().not_null())
                    .col(
                        ColumnDef::new(Conferences::ShortName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Conferences::ConferenceType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conferences::Description).text().null())
                    .col(ColumnDef::new(Conferences::StartDate).big_integer().null())
                    .col(ColumnDef::new(Conferences::EndDate).big_integer().null())
                    .col(
                        ColumnDef::new(Conferences::SubmissionDeadline)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::ReviewDeadline)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::NotificationDate)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Conferences::Location).text().not_null())
                    .col(ColumnDef::new(Conferences::Status).string().not_null())
                    .col(ColumnDef::new(Conferences::Chair).big_integer().null())
                    .col(
                        ColumnDef::new(Conferences::ProgramCommittee)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conferences::Tracks).text().not_null())
                    .col(
                        ColumnDef::new(Conferences::MinReviewersPerSubmission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::MaxReviewersPerSubmission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建投稿表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmissionCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Submissions::Title).string().not_null())
                    .col(ColumnDef::new(Submissions::AbstractText).text().not_null())
                    .col(ColumnDef::new(Submissions::Keywords).text().not_null())
                    .col(ColumnDef::new(Submissions::VenueType).string().not_null())
                    .col(ColumnDef::new(Submissions::VenueId).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::Track).string().null())
                    .col(ColumnDef::new(Submissions::Authors).text().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignedEditor)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(ColumnDef::new(Submissions::StatusHistory).text().not_null())
                    .col(
                        ColumnDef::new(Submissions::ReviewAssignments)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Decision).text().null())
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::SubmittedBy)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评审报告表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reviews::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::AssignmentId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewerId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::Status).string().not_null())
                    .col(ColumnDef::new(Reviews::Responses).text().not_null())
                    .col(ColumnDef::new(Reviews::Assessment).text().not_null())
                    .col(ColumnDef::new(Reviews::Ratings).text().not_null())
                    .col(ColumnDef::new(Reviews::StartedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::SubmittedAt).big_integer().null())
                    .col(ColumnDef::new(Reviews::LastSavedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::WithdrawalReason).text().null())
                    .col(ColumnDef::new(Reviews::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::ReviewerId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 账号表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accounts_email")
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accounts_is_reviewer")
                    .table(Accounts::Table)
                    .col(Accounts::IsReviewer)
                    .to_owned(),
            )
            .await?;

        // 投稿表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_submitted_by")
                    .table(Submissions::Table)
                    .col(Submissions::SubmittedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_assigned_editor")
                    .table(Submissions::Table)
                    .col(Submissions::AssignedEditor)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_status")
                    .table(Submissions::Table)
                    .col(Submissions::Status)
                    .to_owned(),
            )
            .await?;

        // 评审报告表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_submission_id")
                    .table(Reviews::Table)
                    .col(Reviews::SubmissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_reviewer_id")
                    .table(Reviews::Table)
                    .col(Reviews::ReviewerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conferences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Journals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    #[sea_orm(iden = "accounts")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    SecondaryEmail,
    PasswordHash,
    AccountType,
    MembershipStatus,
    MembershipExpiry,
    IsActive,
    Profile,
    TopicsOfInterest,
    IsReviewer,
    ReviewerStatus,
    ReviewerAvailability,
    Roles,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Journals {
    #[sea_orm(iden = "journals")]
    Table,
    Id,
    Title,
    ShortName,
    Description,
    Issn,
    Publisher,
    SubjectAreas,
    EditorInChief,
    AssociateEditors,
    Reviewers,
    PublicationSettings,
    ReviewFormTemplate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Conferences {
    #[sea_orm(iden = "conferences")]
    Table,
    Id,
    Name,
    ShortName,
    ConferenceType,
    Description,
    StartDate,
    EndDate,
    SubmissionDeadline,
    ReviewDeadline,
    NotificationDate,
    Location,
    Status,
    Chair,
    ProgramCommittee,
    Tracks,
    MinReviewersPerSubmission,
    MaxReviewersPerSubmission,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    SubmissionCode,
    Title,
    AbstractText,
    Keywords,
    VenueType,
    VenueId,
    Track,
    Authors,
    SubmittedBy,
    AssignedEditor,
    Status,
    StatusHistory,
    ReviewAssignments,
    Decision,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Reviews {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    SubmissionId,
    AssignmentId,
    ReviewerId,
    Status,
    Responses,
    Assessment,
    Ratings,
    StartedAt,
    SubmittedAt,
    LastSavedAt,
    WithdrawalReason,
    CreatedAt,
    UpdatedAt,
}
