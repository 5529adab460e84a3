//! Domain layer - Records and id assignment

pub mod id_strategy;
pub mod record;

pub use id_strategy::IdStrategy;
pub use record::Record;
