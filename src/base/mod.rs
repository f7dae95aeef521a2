//! Foundation types for the Produire toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ModelId`] - Identity of one parsed code model
//! - [`CodePosition`], [`CodeRange`] - Parser positions (1-indexed, inclusive end)
//! - [`LineCol`], [`LspRange`] - Protocol positions (0-indexed, exclusive end)
//!
//! This module has NO dependencies on other produire modules.

mod model_id;
mod span;

pub use model_id::ModelId;
pub use span::{CodePosition, CodeRange, LineCol, LspRange};
