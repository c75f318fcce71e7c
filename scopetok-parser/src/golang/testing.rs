//! Test helpers
//!
//! Sources in tests mark the cursor with `<|>` so the expected window is visible in the test
//! itself rather than as a hand-computed offset.

/// Cursor marker used by [`split_cursor`].
pub const CURSOR_MARKER: &str = "<|>";

/// A small, well-formed Go file touching every declaration form the parser knows.
pub const SAMPLE_FILE: &str = r#"package sample

import (
	"errors"
	"fmt"
)

const limit = 10

var ErrEmpty = errors.New("empty")

type Stack struct {
	items []int
}

func (s *Stack) Push(v int) {
	s.items = append(s.items, v)
}

func (s *Stack) Pop() (int, error) {
	if len(s.items) == 0 {
		return 0, ErrEmpty
	}
	v := s.items[len(s.items)-1]
	s.items = s.items[:len(s.items)-1]
	return v, nil
}

func main() {
	s := &Stack{}
	for i := 0; i < limit; i++ {
		s.Push(i)
	}
	v, err := s.Pop()
	if err != nil {
		fmt.Println(err)
	}
	fmt.Println(v, 1.5, 'x', 2i, true)
}
"#;

/// Remove the cursor marker from `marked`, returning the source and the marker's byte offset.
///
/// Panics when the marker is missing; this is only meant for tests.
pub fn split_cursor(marked: &str) -> (String, usize) {
    let cursor = marked
        .find(CURSOR_MARKER)
        .unwrap_or_else(|| panic!("no cursor marker in {:?}", marked));
    let source = marked.replacen(CURSOR_MARKER, "", 1);
    (source, cursor)
}

/// Byte offset just past the first occurrence of `needle`.
pub fn cursor_after(source: &str, needle: &str) -> usize {
    source
        .find(needle)
        .map(|i| i + needle.len())
        .unwrap_or_else(|| panic!("{:?} not found", needle))
}
