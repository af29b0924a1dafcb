mod auth;
mod home;
mod mock_test;
mod not_found;
mod progress;
mod resources;
mod tips;

pub use auth::{LoginView, SignupView};
pub use home::HomeView;
pub use mock_test::MockTestView;
pub use not_found::NotFoundView;
pub use progress::ProgressView;
pub use resources::ResourcesView;
pub use tips::TipsView;
