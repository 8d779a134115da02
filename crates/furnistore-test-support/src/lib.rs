//! Shared test doubles and fixtures for the FurniStore client state engine.

mod clock;
mod fixtures;
mod ids;
mod storage;

pub use clock::FixedClock;
pub use fixtures::{product, product_in};
pub use ids::SequenceIdGenerator;
pub use storage::{FailingStorage, RecordingStorage, StorageOp};
