//! Shared UI icons and emojis.
//!
//! Each icon has a plain-text fallback for terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!]");

// Menu indicators
pub static POINTER: Emoji<'_, '_> = Emoji("➤ ", "> ");
pub static NOTE: Emoji<'_, '_> = Emoji("📝 ", "-");
