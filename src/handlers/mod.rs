//! HTTP handlers for the resource routes.

pub mod resource;
pub use resource::*;
