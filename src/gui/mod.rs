pub mod app;
pub mod card_view;
pub mod empty_view;
pub mod message_overlay;
pub mod settings;
pub mod summary_view;
pub mod theme;
pub mod top_bar;

pub use app::PawdeckApp;
