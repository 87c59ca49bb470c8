//! CollectionGateway: the five operations against one declared resource.

mod gateway;
pub use gateway::{CollectionGateway, Stored};
