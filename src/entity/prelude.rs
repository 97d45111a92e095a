pub use super::accounts::Entity as Accounts;
pub use super::conferences::Entity as Conferences;
pub use super::journals::Entity as Journals;
pub use super::reviews::Entity as Reviews;
pub use super::submissions::Entity as Submissions;
