//! Bubble sort emitter

use super::snapshot_of;
use crate::snapshot::{Frame, MetaValue, Metadata, SORTED_TAIL_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Swap,
    Finish,
    Done,
}

/// Adjacent compare-and-swap passes; pass `i` leaves `i` sorted elements at
/// the tail.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    values: Vec<i64>,
    pass: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(input: &[i64]) -> Self {
        BubbleSort {
            values: input.to_vec(),
            pass: 0,
            j: 0,
            phase: Phase::Compare,
        }
    }

    fn meta(tail: usize) -> Metadata {
        Metadata::new().with(SORTED_TAIL_LEN, MetaValue::Count(tail))
    }
}

impl Iterator for BubbleSort {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let n = self.values.len();
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.pass >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    if self.j + 1 >= n - self.pass {
                        self.pass += 1;
                        self.j = 0;
                        continue;
                    }
                    self.phase = Phase::Swap;
                    return Some(Frame::compare(
                        snapshot_of(&self.values),
                        vec![self.j, self.j + 1],
                        Self::meta(self.pass),
                    ));
                }
                Phase::Swap => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if self.values[j] > self.values[j + 1] {
                        self.values.swap(j, j + 1);
                        return Some(Frame::write(
                            snapshot_of(&self.values),
                            vec![j, j + 1],
                            Self::meta(self.pass),
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
