mod about;
mod agencies;
mod error;
mod help;
mod home;
mod login;
mod onboarding;
mod services;

pub use about::AboutPage;
pub use agencies::AgenciesPage;
pub use error::ErrorPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use services::ServicesPage;

/// Progress of a listing fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Loading,
    Loaded(Vec<T>),
    Failed,
}

#[cfg(test)]
mod pages_test;
