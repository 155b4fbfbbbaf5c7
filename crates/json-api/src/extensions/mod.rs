//! Extension traits

mod depot;
mod quantity;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use quantity::QuantityExt as _;
pub(crate) use result::ResultExt as _;
