//! Domain types.

mod key;
mod record;
mod repo;
mod secret;
mod workflow;

pub use key::{EncryptedSecret, RepositoryPublicKey};
pub use record::RepositoryRecord;
pub use repo::RepoId;
pub use secret::Secret;
pub use workflow::Workflow;
