//! Cart Handlers

pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod rename;
pub(crate) mod shipping;
pub(crate) mod update;
