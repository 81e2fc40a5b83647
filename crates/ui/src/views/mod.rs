mod admin;
mod guard;
mod home;
mod learn;
mod login;
mod news;
mod not_found;
mod play;
mod settings;
mod signup;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::AdminView;
pub use guard::Protected;
pub use home::HomeView;
pub use learn::LearnView;
pub use login::LoginView;
pub use news::NewsView;
pub use not_found::NotFoundView;
pub use play::PlayView;
pub use settings::SettingsView;
pub use signup::SignupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::ToastHost;
