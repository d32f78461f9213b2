//! Insertion sort emitter

use super::snapshot_of;
use crate::snapshot::{Frame, MetaValue, Metadata, SORTED_PREFIX_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick up `values[i]` as the key
    Take,
    /// Shift larger prefix elements right while they exceed the key
    Shift,
    Finish,
    Done,
}

/// Grows a sorted prefix by inserting one key per outer step.
///
/// Emits a comparison frame per key, one write frame per rightward shift and a
/// write frame dropping the key into its hole. A key that is already in place
/// produces no write at all, so sorted input yields no mutation frames.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    values: Vec<i64>,
    i: usize,
    hole: usize,
    key: i64,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(input: &[i64]) -> Self {
        InsertionSort {
            values: input.to_vec(),
            i: 1,
            hole: 0,
            key: 0,
            phase: Phase::Take,
        }
    }

    fn meta(prefix: usize) -> Metadata {
        Metadata::new().with(SORTED_PREFIX_LEN, MetaValue::Count(prefix))
    }
}

impl Iterator for InsertionSort {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let n = self.values.len();
        loop {
            match self.phase {
                Phase::Take => {
                    if self.i >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.key = self.values[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Shift;
                    return Some(Frame::compare(
                        snapshot_of(&self.values),
                        vec![self.i - 1, self.i],
                        Self::meta(self.i),
                    ));
                }
                Phase::Shift => {
                    let hole = self.hole;
                    if hole > 0 && self.values[hole - 1] > self.key {
                        self.values[hole] = self.values[hole - 1];
                        self.hole -= 1;
                        return Some(Frame::write(
                            snapshot_of(&self.values),
                            vec![hole - 1, hole],
                            Self::meta(self.i),
                        ));
                    }

                    let moved = hole != self.i;
                    self.values[hole] = self.key;
                    self.i += 1;
                    self.phase = Phase::Take;
                    if moved {
                        return Some(Frame::write(
                            snapshot_of(&self.values),
                            vec![hole],
                            Self::meta(self.i),
                        ));
                    }
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(Frame::done(snapshot_of(&self.values), Self::meta(n)));
                }
                Phase::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    #[test]
    fn test_sorted_input_has_no_writes() {
        let frames: Vec<Frame> = InsertionSort::new(&[1, 2, 3, 4, 5, 6]).collect();
        assert_eq!(comparisons(&frames), 5);
        assert_eq!(writes(&frames), 0);
    }

    #[test]
    fn test_shift_then_place() {
        // [2, 1]: compare (0,1), shift 2 right, place 1 at 0
        let frames: Vec<Frame> = InsertionSort::new(&[2, 1]).collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].highlighted, vec![0, 1]);
        assert_eq!(frames[1].snapshot.values(), Some(&[2, 2][..]));
        assert_eq!(frames[2].highlighted, vec![0]);
        assert_eq!(frames[2].snapshot.values(), Some(&[1, 2][..]));
        assert_eq!(frames[2].metadata.count(SORTED_PREFIX_LEN), Some(2));
        assert!(frames[3].highlighted.is_empty());
    }

    #[test]
    fn test_equal_keys_are_not_shifted() {
        let frames: Vec<Frame> = InsertionSort::new(&[7, 7, 7]).collect();
        assert_eq!(writes(&frames), 0);
        assert_eq!(final_values(&frames), vec![7, 7, 7]);
    }

    #[test]
    fn test_reverse_input_sorts() {
        let frames: Vec<Frame> = InsertionSort::new(&[4, 3, 2, 1]).collect();
        assert!(is_sorted(&final_values(&frames)));
        // 6 shifts plus 3 placements
        assert_eq!(writes(&frames), 9);
    }
}
