//! External record-access capability: the boundary between the pure copy
//! core and whatever actually persists records.

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::RecordStore;
