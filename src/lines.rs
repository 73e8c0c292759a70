//! Line iteration that keeps track of byte offsets.

/// Iterator over `\n`-separated lines, yielding each line together with the
/// byte offset at which it starts.
///
/// Unlike [`str::lines`], an input ending in `\n` yields a final empty line,
/// and `\r` is not stripped; the message grammar treats `\n` as the only line
/// separator.
pub(crate) struct OffsetLines<'a> {
    input: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> OffsetLines<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for OffsetLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.offset;
        let rest = &self.input[start..];
        match rest.find('\n') {
            Some(at) => {
                self.offset = start + at + 1;
                Some((start, &rest[..at]))
            }
            None => {
                self.done = true;
                Some((start, rest))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(usize, &str)> {
        OffsetLines::new(input).collect()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(collect(""), vec![(0, "")]);
    }

    #[test]
    fn offsets_point_at_line_starts() {
        assert_eq!(collect("a\nbc\n\nd"), vec![(0, "a"), (2, "bc"), (5, ""), (6, "d")]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        assert_eq!(collect("a\n"), vec![(0, "a"), (2, "")]);
    }

    #[test]
    fn slicing_by_offset_recovers_the_line() {
        let input = "first\nsecond\n\nfourth";
        for (at, line) in collect(input) {
            assert_eq!(&input[at..at + line.len()], line);
        }
    }
}
