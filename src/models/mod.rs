//! Typed records shared by the store, the validators and the HTTP layer.

pub mod log;
pub mod response;
pub mod track;
