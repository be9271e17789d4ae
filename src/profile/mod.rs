//! Birth profile — the single persisted entity and its store.

pub mod model;
pub mod store;

pub use model::{BirthProfile, Gender, normalize_time};
pub use store::{FileStorage, KvStorage, MemoryStorage, PROFILE_KEY, ProfileStore};
