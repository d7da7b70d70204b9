//! Line assembly for ACPICA's diagnostic output.
//!
//! ACPICA prints in fragments (a prefix, a value, the newline). Fragments are
//! collected into a fixed-capacity line which is logged once complete:
//!
//! ```text
//! "ACPI: " + "Enabled 4 GPEs" + "\n"  →  log::info!(target: "acpica", "ACPI: Enabled 4 GPEs")
//! ```
//!
//! A line that outgrows the buffer is logged early and continues in the next
//! record.

use heapless::String;
use spin::Mutex;

/// Log target of ACPICA's own output.
pub const TARGET: &str = "acpica";

/// Capacity of the shared line buffer, in bytes.
pub const LINE_CAPACITY: usize = 256;

/// Accumulates text fragments into lines.
///
/// `emit` runs without the buffer locked. Output that arrives while the
/// buffer is held elsewhere, from an interrupt or from within `emit`, bypasses
/// it and is emitted fragment by fragment.
pub struct LineBuffer<const N: usize> {
    line: Mutex<String<N>>,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N >= 4, "a line must hold any char") };
        Self {
            line: Mutex::new(String::new()),
        }
    }

    /// Appends `text`, handing every completed line to `emit`.
    ///
    /// A trailing `\r` before the newline is dropped.
    pub fn write_with(&self, text: &str, mut emit: impl FnMut(&str)) {
        let mut rest = text;
        while !rest.is_empty() {
            let Some(mut line) = self.line.try_lock() else {
                emit_unbuffered(rest, &mut emit);
                return;
            };
            let (complete, remaining) = fill(&mut line, rest);
            drop(line);

            rest = remaining;
            if let Some(complete) = complete {
                emit(complete.as_str());
            }
        }
    }

    /// Hands a pending partial line to `emit`.
    pub fn flush_with(&self, mut emit: impl FnMut(&str)) {
        let Some(mut line) = self.line.try_lock() else {
            return;
        };
        let pending = core::mem::take(&mut *line);
        drop(line);

        if !pending.is_empty() {
            emit(pending.as_str());
        }
    }
}

/// Appends `text` to `line` up to the first newline or until `line` is full.
///
/// Returns the line taken out of the buffer if it ended, and the unconsumed
/// text.
fn fill<'t, const N: usize>(line: &mut String<N>, text: &'t str) -> (Option<String<N>>, &'t str) {
    for (index, ch) in text.char_indices() {
        if ch == '\n' {
            if line.ends_with('\r') {
                line.pop();
            }
            return (Some(core::mem::take(line)), &text[index + 1..]);
        }
        if line.push(ch).is_err() {
            return (Some(core::mem::take(line)), &text[index..]);
        }
    }
    (None, "")
}

fn emit_unbuffered(text: &str, emit: &mut impl FnMut(&str)) {
    for piece in text.split_inclusive('\n') {
        let content = piece.strip_suffix('\n').map_or(piece, |content| {
            content.strip_suffix('\r').unwrap_or(content)
        });
        emit(content);
    }
}

static OUTPUT: LineBuffer<LINE_CAPACITY> = LineBuffer::new();

fn log_line(line: &str) {
    log::info!(target: TARGET, "{line}");
}

/// Appends ACPICA output to the shared line buffer, logging complete lines.
pub fn write(text: &str) {
    OUTPUT.write_with(text, log_line);
}

/// Logs a pending partial line of the shared buffer.
pub fn flush() {
    OUTPUT.flush_with(log_line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::string::ToString;
    use std::vec::Vec;

    fn collect<const N: usize>(buffer: &LineBuffer<N>, fragments: &[&str]) -> Vec<std::string::String> {
        let mut lines = Vec::new();
        for fragment in fragments {
            buffer.write_with(fragment, |line| lines.push(line.to_string()));
        }
        lines
    }

    #[test]
    fn joins_fragments_into_lines() {
        let buffer = LineBuffer::<64>::new();
        let lines = collect(&buffer, &["ACPI: ", "Enabled ", "4 GPEs\n", "next"]);
        assert_eq!(lines, ["ACPI: Enabled 4 GPEs"]);

        let mut rest = Vec::new();
        buffer.flush_with(|line| rest.push(line.to_string()));
        assert_eq!(rest, ["next"]);
    }

    #[test]
    fn splits_multiple_lines_in_one_fragment() {
        let buffer = LineBuffer::<64>::new();
        let lines = collect(&buffer, &["one\r\ntwo\n\nthree\n"]);
        assert_eq!(lines, ["one", "two", "", "three"]);
    }

    #[test]
    fn overfull_line_is_emitted_early() {
        let buffer = LineBuffer::<8>::new();
        let lines = collect(&buffer, &["0123456789\n"]);
        assert_eq!(lines, ["01234567", "89"]);
    }

    #[test]
    fn flush_of_empty_buffer_emits_nothing() {
        let buffer = LineBuffer::<8>::new();
        let mut emitted = 0;
        buffer.flush_with(|_| emitted += 1);
        assert_eq!(emitted, 0);
    }

    #[test]
    fn write_from_within_emit_returns() {
        let buffer = LineBuffer::<64>::new();
        let lines = RefCell::new(Vec::new());
        buffer.write_with("outer\n", |line| {
            lines.borrow_mut().push(line.to_string());
            buffer.write_with("inner\n", |nested| lines.borrow_mut().push(nested.to_string()));
        });
        assert_eq!(*lines.borrow(), ["outer", "inner"]);
    }

    #[test]
    fn contended_buffer_is_bypassed() {
        let buffer = LineBuffer::<64>::new();
        buffer.write_with("pending ", |_| unreachable!());

        let held = buffer.line.lock();
        let mut lines = Vec::new();
        buffer.write_with("irq\r\ntail", |line| lines.push(line.to_string()));
        buffer.flush_with(|line| lines.push(line.to_string()));
        drop(held);
        assert_eq!(lines, ["irq", "tail"]);

        let mut rest = Vec::new();
        buffer.flush_with(|line| rest.push(line.to_string()));
        assert_eq!(rest, ["pending "]);
    }
}
