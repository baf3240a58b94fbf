pub mod apply;
pub mod inspect;

pub use apply::ApplyArgs;
pub use inspect::InspectArgs;
