//! Renderer gestures and their handler.
//!
//! A renderer never touches engine state directly: it turns clicks and input
//! into [`PagerMessage`]s and reads back a [`crate::PageView`].

use crate::engine::PaginationFilterEngine;

/// User gestures forwarded by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerMessage {
    /// A tag button was clicked
    ToggleTag(String),

    /// The "all" button was clicked
    ClearFilter,

    /// Jump to a numbered page
    GoToPage(i64),

    /// Raw text submitted from the page-number box
    PageInput(String),

    /// Go to the next page
    NextPage,

    /// Go to the previous page
    PreviousPage,
}

impl PaginationFilterEngine {
    /// Apply a renderer message.
    pub fn handle(&mut self, msg: PagerMessage) {
        match msg {
            PagerMessage::ToggleTag(tag) => self.toggle_tag(&tag),
            PagerMessage::ClearFilter => self.clear_filter(),
            PagerMessage::GoToPage(page) => self.set_page(page),
            PagerMessage::PageInput(input) => self.set_page(parse_page_input(&input)),
            PagerMessage::NextPage => self.next_page(),
            PagerMessage::PreviousPage => self.prev_page(),
        }
    }
}

/// Reads a page number the way a browser's `parseInt` reads the page box.
///
/// Leading whitespace and a sign are accepted, and a `0x`/`0X` prefix switches
/// to hexadecimal. The leading run of digits is used and anything after it
/// ignored. Input with no digits means page 1. Huge values saturate; the
/// engine clamps them afterwards.
pub fn parse_page_input(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen = false;
    let mut value: i64 = 0;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen {
        return 1;
    }
    if negative { -value } else { value }
}
