//! Tests for template engine
//!
//! Split by pass: plain placeholders, conditional blocks, checkbox and
//! radio markers, installment rows, plus token recognition and properties.

use super::*;

mod helpers;

// Token recognition
mod scan;

// Rendering tests
mod render_basic;
