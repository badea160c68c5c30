//! Forward-only line cursor shared by the driver and the struct-body reader.

/// One physical line of the input, with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

#[derive(Debug)]
pub struct LineScanner<'a> {
    lines: std::str::Lines<'a>,
    consumed: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { lines: source.lines(), consumed: 0 }
    }

    /// Produce the next line, or `None` once the input is exhausted.
    pub fn next_line(&mut self) -> Option<RawLine<'a>> {
        let text = self.lines.next()?;
        self.consumed += 1;
        Some(RawLine { number: self.consumed, text })
    }

    /// Number of lines handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = RawLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_from_one() {
        let mut sc = LineScanner::new("a\nb\r\nc");
        assert_eq!(sc.next_line(), Some(RawLine { number: 1, text: "a" }));
        assert_eq!(sc.next_line(), Some(RawLine { number: 2, text: "b" }));
        assert_eq!(sc.next_line(), Some(RawLine { number: 3, text: "c" }));
        assert_eq!(sc.next_line(), None);
        assert_eq!(sc.consumed(), 3);
    }

    #[test]
    fn cursor_is_shared_between_consumers() {
        let mut sc = LineScanner::new("one\ntwo\nthree\n");
        let first = sc.next_line().unwrap();
        // hand the same cursor to a nested reader, then resume
        let rest: Vec<_> = sc.by_ref().take(1).map(|l| l.text).collect();
        assert_eq!(first.text, "one");
        assert_eq!(rest, vec!["two"]);
        assert_eq!(sc.next_line().map(|l| l.number), Some(3));
        assert!(sc.next_line().is_none());
    }
}
