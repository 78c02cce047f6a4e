//! Page modules

pub mod exchange;
pub mod home;
pub mod landing;

pub use exchange::ExchangePage;
pub use home::HomePage;
pub use landing::LandingPage;
