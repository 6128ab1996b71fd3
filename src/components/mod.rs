//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod banner;
mod slider;
mod tile;
mod movie_detail;
mod browse_view;
mod loader;
mod error_panel;

pub use header::Header;
pub use banner::Banner;
pub use slider::Slider;
pub use tile::Tile;
pub use movie_detail::MovieDetail;
pub use browse_view::BrowseView;
pub use loader::Loader;
pub use error_panel::ErrorPanel;
