pub mod accounts;
pub mod auth;
pub mod conferences;
pub mod journals;
pub mod reviews;
pub mod submissions;
pub mod system;

pub use accounts::AccountService;
pub use auth::AuthService;
pub use conferences::ConferenceService;
pub use journals::JournalService;
pub use reviews::ReviewService;
pub use submissions::SubmissionService;
pub use system::SystemService;
