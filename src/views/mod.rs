pub mod app;
pub mod sessions;
pub mod shared;

pub use app::App;
