mod activity_log;
mod category;
mod product;
mod transaction;
mod user;

pub use self::activity_log::ActivityLog;
pub use self::category::Category;
pub use self::product::{Product, StockStatus};
pub use self::transaction::{
    ItemCondition, Transaction, TransactionStatus, TransactionType,
};
pub use self::user::{Invitation, User, UserRole};
