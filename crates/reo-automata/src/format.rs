// Binary image of a built automaton.
//
// Layout (all integers little-endian, the only byte order supported):
//
//   offset  size  field
//   0       4     magic "REOA"
//   4       4     format version
//   8       4     state count
//   12      4     transition count
//   16      4     output count
//   20      4     term count
//   24      ..    state records (24 bytes each)
//   ..      ..    transitions (8 bytes each)
//   ..      ..    output term ids (4 bytes each)
//   ..      ..    terms: tag u16, byte length u32, UTF-8 bytes

use std::collections::VecDeque;

use bytemuck::Pod;

use crate::AutomatonError;
use crate::matcher::{Term, WordlistAutomaton};
use crate::transition::{ROOT, StateRecord, Transition};

pub const MAGIC: [u8; 4] = *b"REOA";
pub const FORMAT_VERSION: u32 = 1;
pub const HEADER_SIZE: usize = 24;

fn read_u32(data: &[u8], offset: usize) -> Result<u32, AutomatonError> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or(AutomatonError::TooShort {
            expected: offset + 4,
            actual: data.len(),
        })?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16, AutomatonError> {
    let bytes = data
        .get(offset..offset + 2)
        .ok_or(AutomatonError::TooShort {
            expected: offset + 2,
            actual: data.len(),
        })?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Copy `count` records out of a possibly unaligned byte buffer.
fn read_pod_vec<T: Pod>(data: &[u8], offset: usize, count: usize) -> Result<(Vec<T>, usize), AutomatonError> {
    let size = size_of::<T>();
    let end = count
        .checked_mul(size)
        .and_then(|n| n.checked_add(offset))
        .ok_or_else(|| AutomatonError::Corrupt("record count overflows".to_string()))?;
    if end > data.len() {
        return Err(AutomatonError::TooShort {
            expected: end,
            actual: data.len(),
        });
    }
    let items = data[offset..end]
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect();
    Ok((items, end))
}

impl WordlistAutomaton {
    /// Serialize into a self-contained image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            HEADER_SIZE
                + self.states.len() * size_of::<StateRecord>()
                + self.transitions.len() * size_of::<Transition>()
                + self.outputs.len() * 4,
        );
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&(self.states.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.transitions.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.terms.len() as u32).to_le_bytes());
        out.extend_from_slice(bytemuck::cast_slice(&self.states));
        out.extend_from_slice(bytemuck::cast_slice(&self.transitions));
        out.extend_from_slice(bytemuck::cast_slice(&self.outputs));
        for term in &self.terms {
            out.extend_from_slice(&term.tag.to_le_bytes());
            out.extend_from_slice(&(term.text.len() as u32).to_le_bytes());
            out.extend_from_slice(term.text.as_bytes());
        }
        out
    }

    /// Load an image produced by [`WordlistAutomaton::to_bytes`].
    ///
    /// Every index in the image is bounds-checked, so a corrupt image yields
    /// an error rather than a matcher that panics later.
    pub fn from_bytes(data: &[u8]) -> Result<Self, AutomatonError> {
        if data.len() < HEADER_SIZE {
            return Err(AutomatonError::TooShort {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }
        if data[0..4] != MAGIC {
            return Err(AutomatonError::InvalidMagic);
        }
        let version = read_u32(data, 4)?;
        if version != FORMAT_VERSION {
            return Err(AutomatonError::UnsupportedVersion(version));
        }
        let state_count = read_u32(data, 8)? as usize;
        let transition_count = read_u32(data, 12)? as usize;
        let output_count = read_u32(data, 16)? as usize;
        let term_count = read_u32(data, 20)? as usize;

        let (states, offset) = read_pod_vec::<StateRecord>(data, HEADER_SIZE, state_count)?;
        let (transitions, offset) = read_pod_vec::<Transition>(data, offset, transition_count)?;
        let (outputs, mut offset) = read_pod_vec::<u32>(data, offset, output_count)?;

        let mut terms = Vec::with_capacity(term_count.min(data.len()));
        for i in 0..term_count {
            let tag = read_u16(data, offset)?;
            let len = read_u32(data, offset + 2)? as usize;
            let start = offset + 6;
            let bytes = data.get(start..start + len).ok_or(AutomatonError::TooShort {
                expected: start + len,
                actual: data.len(),
            })?;
            let text = std::str::from_utf8(bytes)
                .map_err(|e| AutomatonError::Corrupt(format!("term {i} is not UTF-8: {e}")))?;
            terms.push(Term {
                text: text.to_string(),
                tag,
                char_len: text.chars().count() as u32,
            });
            offset = start + len;
        }
        if offset != data.len() {
            return Err(AutomatonError::Corrupt(format!(
                "{} trailing bytes",
                data.len() - offset
            )));
        }

        let automaton = WordlistAutomaton::from_parts(states, transitions, outputs, terms);
        automaton.validate()?;
        Ok(automaton)
    }

    fn validate(&self) -> Result<(), AutomatonError> {
        if self.states.is_empty() {
            return Err(AutomatonError::Corrupt("no root state".to_string()));
        }
        let state_count = self.states.len();
        for (i, s) in self.states.iter().enumerate() {
            let t = s.transition_range();
            if t.end > self.transitions.len() {
                return Err(AutomatonError::Corrupt(format!("state {i}: transitions out of range")));
            }
            if !self.transitions[t].windows(2).all(|w| w[0].symbol < w[1].symbol) {
                return Err(AutomatonError::Corrupt(format!("state {i}: transitions not sorted")));
            }
            if s.output_range().end > self.outputs.len() {
                return Err(AutomatonError::Corrupt(format!("state {i}: outputs out of range")));
            }
            if s.fail as usize >= state_count {
                return Err(AutomatonError::Corrupt(format!("state {i}: failure link out of range")));
            }
        }
        if let Some(t) = self.transitions.iter().find(|t| t.target as usize >= state_count) {
            return Err(AutomatonError::Corrupt(format!("transition target {} out of range", t.target)));
        }
        if let Some(id) = self.outputs.iter().find(|&&id| id as usize >= self.terms.len()) {
            return Err(AutomatonError::Corrupt(format!("output term id {id} out of range")));
        }
        self.validate_depths()
    }

    /// The goto edges must form a tree rooted at state 0, failure links must
    /// point strictly closer to the root, and no state may report a term
    /// longer than the path leading to it. Otherwise `step` could cycle and
    /// match offsets could underflow.
    fn validate_depths(&self) -> Result<(), AutomatonError> {
        let mut depth: Vec<Option<u32>> = vec![None; self.states.len()];
        depth[ROOT as usize] = Some(0);
        let mut queue = VecDeque::from([ROOT]);
        while let Some(state) = queue.pop_front() {
            let d = depth[state as usize].unwrap_or_default();
            for t in &self.transitions[self.states[state as usize].transition_range()] {
                let slot = &mut depth[t.target as usize];
                if slot.is_some() {
                    return Err(AutomatonError::Corrupt(format!(
                        "state {} reached by more than one edge",
                        t.target
                    )));
                }
                *slot = Some(d + 1);
                queue.push_back(t.target);
            }
        }

        for (i, s) in self.states.iter().enumerate() {
            let Some(d) = depth[i] else {
                return Err(AutomatonError::Corrupt(format!("state {i} is unreachable")));
            };
            if i != ROOT as usize && depth[s.fail as usize].is_none_or(|f| f >= d) {
                return Err(AutomatonError::Corrupt(format!(
                    "state {i}: failure link does not lead towards the root"
                )));
            }
            for &id in &self.outputs[s.output_range()] {
                if self.terms[id as usize].char_len > d {
                    return Err(AutomatonError::Corrupt(format!(
                        "state {i}: term {id} is longer than its path"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;

    fn sample() -> WordlistAutomaton {
        let mut b = AutomatonBuilder::new();
        for (t, tag) in [("he", 0), ("here", 1), ("tongue", 1), ("whā", 0)] {
            b.add(t, tag);
        }
        b.build()
    }

    #[test]
    fn image_reloads_with_same_behaviour() {
        let a = sample();
        let image = a.to_bytes();
        let b = WordlistAutomaton::from_bytes(&image).unwrap();
        assert_eq!(b.state_count(), a.state_count());
        assert_eq!(b.terms(), a.terms());
        assert_eq!(b.is_term("here").map(|t| t.tag), Some(1));
        assert_eq!(b.find_iter("there whā").count(), a.find_iter("there whā").count());
    }

    #[test]
    fn reject_short_image() {
        let err = WordlistAutomaton::from_bytes(&[0u8; 8]).unwrap_err();
        assert!(matches!(err, AutomatonError::TooShort { expected: 24, actual: 8 }));
    }

    #[test]
    fn reject_bad_magic() {
        let mut image = sample().to_bytes();
        image[0] = b'X';
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::InvalidMagic)
        ));
    }

    #[test]
    fn reject_unknown_version() {
        let mut image = sample().to_bytes();
        image[4..8].copy_from_slice(&9u32.to_le_bytes());
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn reject_truncated_and_trailing() {
        let image = sample().to_bytes();
        assert!(WordlistAutomaton::from_bytes(&image[..image.len() - 1]).is_err());
        let mut padded = image.clone();
        padded.push(0);
        assert!(matches!(
            WordlistAutomaton::from_bytes(&padded),
            Err(AutomatonError::Corrupt(_))
        ));
    }

    #[test]
    fn reject_out_of_range_target() {
        let mut image = sample().to_bytes();
        let state_count = u32::from_le_bytes([image[8], image[9], image[10], image[11]]) as usize;
        // target field of the first transition
        let at = HEADER_SIZE + state_count * size_of::<StateRecord>() + 4;
        image[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::Corrupt(_))
        ));
    }

    /// Byte offset of a field in the state record for `state`.
    fn state_field(state: usize, field: usize) -> usize {
        HEADER_SIZE + state * size_of::<StateRecord>() + field * 4
    }

    #[test]
    fn reject_failure_link_cycle() {
        let a = sample();
        let mut image = a.to_bytes();
        // state 1 failing to itself would make `step` spin forever
        let at = state_field(1, 2);
        image[at..at + 4].copy_from_slice(&1u32.to_le_bytes());
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::Corrupt(msg)) if msg.contains("failure link")
        ));
    }

    #[test]
    fn reject_failure_link_to_deeper_state() {
        let a = sample();
        let deepest = a.state_count() - 1;
        let mut image = a.to_bytes();
        let at = state_field(1, 2);
        image[at..at + 4].copy_from_slice(&(deepest as u32).to_le_bytes());
        assert!(WordlistAutomaton::from_bytes(&image).is_err());
    }

    #[test]
    fn reject_term_longer_than_its_state() {
        let mut b = AutomatonBuilder::new();
        b.add("a", 0);
        b.add("abc", 0);
        let a = b.build();
        let long_id = a.terms().iter().position(|t| t.text == "abc").unwrap() as u32;
        let mut image = a.to_bytes();
        // point every output slot at "abc", including the one on state "a"
        let outputs_at = HEADER_SIZE
            + a.state_count() * size_of::<StateRecord>()
            + a.transition_count() * size_of::<Transition>();
        for i in 0..a.outputs.len() {
            let at = outputs_at + i * 4;
            image[at..at + 4].copy_from_slice(&long_id.to_le_bytes());
        }
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::Corrupt(msg)) if msg.contains("longer than its path")
        ));
    }

    #[test]
    fn reject_shared_target() {
        let mut b = AutomatonBuilder::new();
        b.add("ab", 0);
        b.add("cd", 0);
        let a = b.build();
        let mut image = a.to_bytes();
        let transitions_at = HEADER_SIZE + a.state_count() * size_of::<StateRecord>();
        // redirect the root's second edge onto the first edge's target
        let first = u32::from_le_bytes(image[transitions_at + 4..transitions_at + 8].try_into().unwrap());
        image[transitions_at + 12..transitions_at + 16].copy_from_slice(&first.to_le_bytes());
        assert!(matches!(
            WordlistAutomaton::from_bytes(&image),
            Err(AutomatonError::Corrupt(_))
        ));
    }

    #[test]
    fn empty_automaton_image() {
        let image = WordlistAutomaton::default().to_bytes();
        let a = WordlistAutomaton::from_bytes(&image).unwrap();
        assert_eq!(a.term_count(), 0);
        assert!(a.is_term("a").is_none());
    }
}
