//! Spintax variant counting.
//!
//! `{Hi|Hello} {there|friend}` renders four ways; alternatives add, adjacent
//! groups multiply, and groups nest. A `{` without a matching `}` is plain
//! text, as are `|` and `}` outside any group. Identical alternatives inside
//! one group count once.

use std::collections::HashSet;

/// Number of distinct renderings, saturating at `u64::MAX`.
///
/// Braces are paired up front, then one left-to-right pass keeps the open
/// groups on an explicit stack. No backtracking and no recursion.
pub fn count_variants(template: &str) -> u64 {
    let bytes = template.as_bytes();
    let matched = matched_opens(bytes);

    let mut root: u64 = 1;
    let mut open: Vec<Group<'_>> = Vec::new();

    for (pos, &b) in bytes.iter().enumerate() {
        match b {
            b'{' if matched[pos] => open.push(Group::new(pos + 1)),
            b'|' => {
                if let Some(group) = open.last_mut() {
                    group.finish_alternative(bytes, pos);
                    group.start = pos + 1;
                }
            },
            b'}' => {
                if let Some(mut group) = open.pop() {
                    group.finish_alternative(bytes, pos);
                    let parent = open.last_mut().map_or(&mut root, |g| &mut g.product);
                    *parent = parent.saturating_mul(group.sum);
                }
            },
            _ => {},
        }
    }
    root
}

/// Uniqueness score for the risk calculator: at least 1.
pub fn uniqueness_score(template: &str) -> i64 {
    i64::try_from(count_variants(template)).unwrap_or(i64::MAX).max(1)
}

/// Marks every `{` that has a matching `}`. Unmatched opens stay literal.
///
/// An unmatched `{` can never sit inside a matched pair, so during counting
/// every `}` seen with a group open closes exactly the innermost one.
fn matched_opens(bytes: &[u8]) -> Vec<bool> {
    let mut matched = vec![false; bytes.len()];
    let mut stack = Vec::new();
    for (pos, &b) in bytes.iter().enumerate() {
        match b {
            b'{' => stack.push(pos),
            b'}' => {
                if let Some(open) = stack.pop() {
                    matched[open] = true;
                }
            },
            _ => {},
        }
    }
    matched
}

/// A group still being scanned.
struct Group<'a> {
    /// First byte of the current alternative
    start: usize,
    /// Product of the nested groups in the current alternative
    product: u64,
    /// Sum over the distinct alternatives finished so far
    sum: u64,
    seen: HashSet<&'a [u8]>,
}

impl<'a> Group<'a> {
    fn new(start: usize) -> Self {
        Self { start, product: 1, sum: 0, seen: HashSet::new() }
    }

    fn finish_alternative(&mut self, bytes: &'a [u8], end: usize) {
        let alternative = bytes.get(self.start..end).unwrap_or_default();
        if self.seen.insert(alternative) {
            self.sum = self.sum.saturating_add(self.product);
        }
        self.product = 1;
    }
}
