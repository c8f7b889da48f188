//! QEMU monitor key names
//!
//! Maps input symbols to the key names understood by the monitor's
//! `sendkey` command. See the QEMU monitor docs for the full vocabulary:
//!
//! ```text
//! shift  shift_r  alt  alt_r  altgr  altgr_r  ctrl  ctrl_r  menu  esc
//! 1..0  minus  equal  backspace  tab  a..z  ret  comma  dot  slash
//! asterisk  spc  caps_lock  f1..f12  num_lock  scroll_lock  kp_*
//! home  pgup  pgdn  end  left  up  down  right  insert  delete
//! ```
//!
//! The table is incomplete on purpose: only symbols that are not
//! their own key name are listed.

use std::borrow::Cow;

use super::tokenizer::Token;
use crate::constants::SHIFT_PREFIX;

// ============================================================================
// Symbol Table
// ============================================================================

/// Literal symbols with a dedicated key name
pub const KEY_MAP: &[(char, &str)] = &[
    ('%', "shift-5"),
    ('/', "slash"),
    (':', "shift-semicolon"),
    ('=', "equal"),
    ('.', "dot"),
    (' ', "spc"),
    ('-', "minus"),
    ('_', "shift-minus"),
    ('*', "asterisk"),
    (',', "comma"),
    ('+', "shift-equal"),
    ('|', "shift-backslash"),
    ('\\', "backslash"),
];

/// Look up a literal symbol in the key map
pub fn symbol_key_name(c: char) -> Option<&'static str> {
    KEY_MAP
        .iter()
        .find(|&&(symbol, _)| symbol == c)
        .map(|&(_, name)| name)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve an escape payload (`<lt>`, `<enter>`, ...) to a key name
pub fn escape_key_name(name: &str) -> &str {
    match name {
        "lt" => "shift-comma",
        "gt" => "shift-dot",
        other => other,
    }
}

/// Resolve a literal character to a key name.
/// Unmapped characters are their own key name.
pub fn literal_key_name(c: char) -> Cow<'static, str> {
    match symbol_key_name(c) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(c.to_string()),
    }
}

/// Resolve any token to its key name
pub fn resolve<'a>(token: Token<'a>) -> Cow<'a, str> {
    match token {
        Token::Escape(name) => Cow::Borrowed(escape_key_name(name)),
        Token::Literal(c) => literal_key_name(c),
    }
}

/// Express a single uppercase ASCII letter as `shift-<lowercase>`.
/// Every other key name is returned unchanged.
pub fn with_shift(key_name: &str) -> Cow<'_, str> {
    let mut chars = key_name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => {
            Cow::Owned(format!("{}{}", SHIFT_PREFIX, c.to_ascii_lowercase()))
        }
        _ => Cow::Borrowed(key_name),
    }
}
