// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Star-run consolidation.
//!
//! A maximal run of consecutive `*` characters collapses into a single
//! emission. Which one depends on the globstar dialect and on the
//! characters immediately adjacent to the run.

use crate::buffer::RegexBuffer;
use crate::options::Options;

/// Greedy match-all, used whenever globstar is off.
const MATCH_ALL: &str = ".*";

/// One path segment: any run of non-separator characters.
const SEGMENT_WILDCARD: &str = "([^/]*)";

/// Zero or more whole path segments, trailing separators included.
const GLOBSTAR: &str = "((?:[^/]*(?:/|$))*)";

/// Consume the maximal `*` run starting at `start` and emit its
/// translation into `out`.
///
/// Returns the index of the first character after everything the run
/// absorbed, including a trailing separator subsumed by a globstar.
pub(crate) fn consolidate(
    chars: &[char],
    start: usize,
    opts: &Options,
    out: &mut RegexBuffer,
) -> usize {
    debug_assert_eq!(chars.get(start), Some(&'*'));

    let prev_char = start.checked_sub(1).map(|i| chars[i]);
    let mut end = start + 1;
    while chars.get(end) == Some(&'*') {
        end += 1;
    }
    let next_char = chars.get(end).copied();

    if !opts.globstar {
        // Any number of stars matches across separators.
        out.push_str(MATCH_ALL);
        return end;
    }

    // A run qualifies as a globstar only when it spans a whole segment:
    // more than one star, entered at a segment start and left at a
    // segment end. Group boundaries count on either side, so `**`
    // inside an alternation group keeps its segment-spanning meaning.
    let run_len = end - start;
    let from_segment_start = matches!(prev_char, None | Some('/' | '{' | ','));
    let to_segment_end = matches!(next_char, None | Some('/' | ',' | '}'));

    if run_len > 1 && from_segment_start && to_segment_end {
        if next_char == Some('/') {
            // The globstar's segments carry their own trailing
            // separators; absorb the one in the pattern.
            end += 1;
        } else if prev_char == Some('/') && out.ends_with("\\/") {
            // No trailing separator to absorb; take back the leading
            // one already emitted instead.
            out.truncate_last(2);
        }
        out.push_str(GLOBSTAR);
    } else {
        out.push_str(SEGMENT_WILDCARD);
    }
    end
}
