//! Tab completion by longest common extension
//!
//! The typed line is matched character by character against every command
//! name. A name drops out at the first position it disagrees and never comes
//! back. If every typed character survives, the line is extended for as long
//! as all remaining names agree.

use alloc::vec;
use alloc::vec::Vec;

/// Compute the bytes to append to `line` given the registered `names`
///
/// Returns `None` when the line is empty, when some typed character matches
/// no name, or when the surviving names already disagree at the next
/// position. The returned slice borrows from the representative name (the
/// last survivor in registration order).
pub fn complete<'a>(line: &[u8], names: &[&'a str]) -> Option<&'a [u8]> {
    let count = line.len();
    let mut mismatched = vec![false; names.len()];

    let mut i = 0;
    while i < count {
        let mut matches = 0;
        for (j, name) in names.iter().enumerate() {
            if !mismatched[j] && name.as_bytes().get(i) == Some(&line[i]) {
                matches += 1;
            } else {
                mismatched[j] = true;
            }
        }

        if matches == 0 {
            break;
        }
        i += 1;
    }

    if i == 0 || i < count {
        return None;
    }

    let survivors: Vec<&'a [u8]> = names
        .iter()
        .zip(&mismatched)
        .filter(|(_, m)| !**m)
        .map(|(name, _)| name.as_bytes())
        .collect();

    let representative = *survivors.last()?;

    let mut k = count;
    while k < representative.len()
        && survivors.iter().all(|s| s.get(k) == Some(&representative[k]))
    {
        k += 1;
    }

    (k > count).then(move || &representative[count..k])
}
