use serde::Serialize;

const LETTERS: usize = 26;

/// Navigation anchors for the keyword index, one slot per letter `A`..=`Z`.
///
/// Each slot holds the case-insensitively smallest term seen so far that
/// starts with that letter. Terms starting with anything other than an
/// ASCII letter never claim a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlphabetAnchors {
    slots: [Option<String>; LETTERS],
}

impl AlphabetAnchors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a newly recorded term. It replaces the current anchor for its
    /// letter when the slot is empty or the term is smaller ignoring case.
    pub fn offer(&mut self, term: &str) {
        let Some(index) = term.chars().next().and_then(slot_index) else {
            return;
        };

        let slot = &mut self.slots[index];
        let replace = match slot {
            None => true,
            Some(current) => term.to_lowercase() < current.to_lowercase(),
        };
        if replace {
            *slot = Some(term.to_string());
        }
    }

    /// The anchor term for `letter` (either case), if any.
    pub fn get(&self, letter: char) -> Option<&str> {
        slot_index(letter).and_then(|i| self.slots[i].as_deref())
    }

    /// Iterate over `A`..=`Z` with each letter's anchor term.
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<&str>)> + '_ {
        ('A'..='Z').zip(self.slots.iter().map(|s| s.as_deref()))
    }

    /// Render the navigation line: a bare letter when no term starts with
    /// it, otherwise a link to the anchor term's heading. Every token is
    /// followed by a single space.
    pub fn render_navigation(&self) -> String {
        let mut line = String::new();
        for (letter, term) in self.iter() {
            match term {
                Some(term) => {
                    line.push('[');
                    line.push(letter);
                    line.push_str("](#");
                    line.push_str(&slug(term));
                    line.push(')');
                }
                None => line.push(letter),
            }
            line.push(' ');
        }
        line
    }
}

/// Heading fragment for a term: spaces become hyphens, slashes are dropped,
/// and the result is lower-cased.
pub fn slug(term: &str) -> String {
    term.replace(' ', "-").replace('/', "").to_lowercase()
}

fn slot_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
