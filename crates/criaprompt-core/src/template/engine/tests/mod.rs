//! Tests for template engine
//!
//! Organized into focused submodules per concern.

use super::*;

// Test helper functions
mod helpers;


// Extraction and defaults
mod defaults;
