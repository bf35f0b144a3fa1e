pub mod analysis;
pub mod api;
pub mod errors;
pub mod feedback;
pub mod gesture;
pub mod models;
pub mod session;
pub mod tasks;

pub use errors::PawdeckError;
pub use models::{
    CatCard,
    NO_TAGS_SENTINEL,
};
