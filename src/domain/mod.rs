pub mod order;
pub mod inventory;

pub use order::*;
pub use inventory::*;
