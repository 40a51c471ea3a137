use std::iter::FusedIterator;
use std::str::Split;

const LINE_FEED: char = '\n';

/// A physical line: 1-based number plus its exact content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub number: usize,
    pub content: &'a str,
}

impl<'a> LineRecord<'a> {
    #[must_use]
    pub const fn new(number: usize, content: &'a str) -> Self {
        Self { number, content }
    }
}

/// Iterator over the physical lines of a file, in file order.
#[derive(Debug, Clone)]
pub struct PhysicalLines<'a> {
    fragments: Split<'a, char>,
    next_number: usize,
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = LineRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let content = self.fragments.next()?;
        let record = LineRecord::new(self.next_number, content);
        self.next_number += 1;
        Some(record)
    }
}

impl FusedIterator for PhysicalLines<'_> {}

/// Split `content` into physical lines.
///
/// The fragment after the last line-feed is always a line, even when empty,
/// so `"a\n"` yields two lines and `""` yields one empty line.
#[must_use]
pub fn split_lines(content: &str) -> PhysicalLines<'_> {
    PhysicalLines {
        fragments: content.split(LINE_FEED),
        next_number: 1,
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
