pub mod inventory;
pub mod month;
pub mod product;
pub mod report;
pub mod snapshot;
pub mod transaction;
