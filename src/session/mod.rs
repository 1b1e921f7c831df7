//! Academic session resolution
//!
//! Translates session labels into date windows, remembers which session a
//! device is looking at, and clamps report filters into the chosen window.

mod cache;
mod clamp;
mod control;
mod label;
mod range;
mod resolver;
mod shared;

pub(crate) use clamp::{ClampRequest, ClampedRange};
pub(crate) use control::{ControlKind, DateControl, TextControl};
#[cfg(test)]
pub(crate) use label::SessionYears;
pub(crate) use range::SessionRange;
pub(crate) use resolver::{SessionResolver, SessionWindow};
pub(crate) use shared::SessionConfig;
