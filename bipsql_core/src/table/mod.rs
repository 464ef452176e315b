pub mod model;
pub mod pager;

pub use model::{Row, Table};
pub use pager::{Paginator, PAGE_SIZE};
