//! Directive substitution over raw configuration text.
//!
//! A directive is `${{ <command> }}` anywhere in the document. Each one is
//! replaced by the standard output of its command before the document is
//! decoded. Matching is leftmost-first and non-overlapping, and a directive
//! ends at the first `}}` after its opening marker.

use std::ops::Range;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};
use crate::execution::CommandRunner;

const OPEN_MARKER: &[u8] = b"${{";
const CLOSE_MARKER: &[u8] = b"}}";

/// One directive found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Byte range of the whole `${{ ... }}` escape.
    pub span: Range<usize>,
    /// Inner content with surrounding spaces removed.
    pub command: String,
}

/// Iterator over the directives of a document, in order of appearance.
pub struct Directives<'a> {
    raw: &'a [u8],
    position: usize,
}

/// Finds every directive in `raw`.
///
/// An opening marker with no closing marker after it is plain text.
pub fn directives(raw: &[u8]) -> Directives<'_> {
    Directives { raw, position: 0 }
}

impl Iterator for Directives<'_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.raw[self.position..];
        let start = self.position + find(rest, OPEN_MARKER)?;
        let content_start = start + OPEN_MARKER.len();
        let content_end = content_start + find(&self.raw[content_start..], CLOSE_MARKER)?;
        let end = content_end + CLOSE_MARKER.len();

        self.position = end;

        Some(Directive {
            span: start..end,
            command: String::from_utf8_lossy(trim_spaces(&self.raw[content_start..content_end]))
                .into_owned(),
        })
    }
}

/// Replaces every directive in `raw` with the output of its command.
///
/// All commands share one deadline of `timeout`, counted from this call.
///
/// # Errors
///
/// Returns [`Error::Directive`] for the first command that fails or runs out
/// of time. No later directive is run and no partial output is returned.
pub fn substitute(raw: &[u8], runner: &impl CommandRunner, timeout: Duration) -> Result<Vec<u8>> {
    substitute_until(raw, runner, Instant::now() + timeout)
}

/// Like [`substitute`], with an absolute `deadline`.
///
/// # Errors
///
/// See [`substitute`].
pub fn substitute_until(
    raw: &[u8],
    runner: &impl CommandRunner,
    deadline: Instant,
) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(raw.len());
    let mut copied_up_to = 0;

    for directive in directives(raw) {
        let Directive { span, command } = directive;

        if Instant::now() >= deadline {
            return Err(Error::directive_error(command, Error::DeadlineElapsed));
        }

        debug!("Resolving directive `{}`", command);
        let result = match runner.run(&command, deadline) {
            Ok(result) => result,
            Err(e) => return Err(Error::directive_error(command, e)),
        };

        output.extend_from_slice(&raw[copied_up_to..span.start]);
        output.extend_from_slice(trim_line_endings(&result));
        copied_up_to = span.end;
    }

    output.extend_from_slice(&raw[copied_up_to..]);
    Ok(output)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != b' ').unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| *b != b' ').map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn trim_line_endings(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| *b != b'\r' && *b != b'\n')
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
