pub mod admin;

pub mod auth;

pub mod conferences;

pub mod journals;

pub mod reviews;

pub mod submissions;

pub mod system;

pub mod users;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use conferences::configure_conference_routes;
pub use journals::configure_journal_routes;
pub use reviews::configure_review_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
