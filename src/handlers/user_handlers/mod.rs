mod crud;
mod list;

pub use self::crud::{delete, save};
pub use self::list::list;
