//! Routed Pages

mod home;
mod tv;
mod search;
mod not_found;

pub use home::HomePage;
pub use tv::TvPage;
pub use search::{search_href, SearchPage};
pub use not_found::NotFound;
