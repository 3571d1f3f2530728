//! ShadCN-style reusable UI components.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`LinkButton`]: Anchor styled as a button
//! - [`icons`]: SVG icon components

mod button;
mod icons;

pub use button::{Button, ButtonSize, ButtonVariant, LinkButton};
pub use icons::*;
