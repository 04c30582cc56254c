mod crud;
mod helpers;
mod list;

pub use self::crud::{delete, save};
pub use self::list::list;
