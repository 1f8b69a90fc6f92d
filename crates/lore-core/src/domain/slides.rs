/// Cursor over a fixed, non-empty sequence of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    /// Cursor at index 0. Returns `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Move by `n` positions, wrapping in both directions.
    pub fn advance(&mut self, n: i64) -> usize {
        let len = self.len as i128;
        let next = (self.index as i128 + n as i128).rem_euclid(len);
        self.index = next as usize;
        self.index
    }
}
