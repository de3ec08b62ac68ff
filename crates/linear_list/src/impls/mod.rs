mod contiguous;

pub mod link_list;
pub mod sq_list;
pub mod static_sq_list;

pub use link_list::{LinkList, NodeId};
pub use sq_list::SqList;
pub use static_sq_list::StaticSqList;
