pub mod memory;
pub mod mysql;

pub use marquee_core::error::StorageError;
pub use marquee_core::repository::{ReadRepository, Repository};
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
