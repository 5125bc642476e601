//! Porter stemming algorithm.
//!
//! The generator that produces `searchindex.js` runs every indexed word
//! through an English (Porter) stemmer before storing it in the `terms`
//! map, so the builder here has to produce identical stems for lookups
//! from a stock search widget to work (`italy` -> `itali`,
//! `compatibility` -> `compat`, `installation` -> `instal`).

/// Stem a single word.
///
/// Words are lowercased first. Non-ASCII words and words of one or two
/// characters are returned lowercased but otherwise untouched, matching
/// the reference algorithm's behavior on short words.
pub fn stem(word: &str) -> String {
    if !word.is_ascii() {
        return word.to_lowercase();
    }

    let lower = word.to_ascii_lowercase();
    if lower.len() <= 2 {
        return lower;
    }

    let mut s = Stemmer {
        b: lower.into_bytes(),
    };
    s.step1a();
    s.step1b();
    s.step1c();
    s.step2();
    s.step3();
    s.step4();
    s.step5();

    // The buffer only ever holds ASCII bytes.
    String::from_utf8_lossy(&s.b).into_owned()
}

struct Stemmer {
    b: Vec<u8>,
}

impl Stemmer {
    /// A consonant is any letter other than a/e/i/o/u, plus `y` when it is
    /// word-initial or follows a vowel. Non-letters (digits, underscores)
    /// count as consonants so that identifier-like words pass through the
    /// suffix rules unchanged.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Measure of the prefix `b[..j]`: the number of vowel-consonant
    /// sequences in its `[C](VC)^m[V]` form.
    fn measure(&self, j: usize) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < j && self.is_consonant(i) {
            i += 1;
        }
        while i < j {
            while i < j && !self.is_consonant(i) {
                i += 1;
            }
            if i >= j {
                break;
            }
            n += 1;
            while i < j && self.is_consonant(i) {
                i += 1;
            }
        }
        n
    }

    fn has_vowel(&self, j: usize) -> bool {
        (0..j).any(|i| !self.is_consonant(i))
    }

    /// `b[..j]` ends with a double consonant.
    fn double_consonant(&self, j: usize) -> bool {
        j >= 2 && self.b[j - 1] == self.b[j - 2] && self.is_consonant(j - 1)
    }

    /// `b[..j]` ends consonant-vowel-consonant where the final consonant
    /// is not w, x, or y. Used to decide when to restore a trailing `e`.
    fn ends_cvc(&self, j: usize) -> bool {
        j >= 3
            && self.is_consonant(j - 1)
            && !self.is_consonant(j - 2)
            && self.is_consonant(j - 3)
            && !matches!(self.b[j - 1], b'w' | b'x' | b'y')
    }

    /// If the buffer ends with `suffix`, return the stem length.
    fn ends(&self, suffix: &[u8]) -> Option<usize> {
        if self.b.len() >= suffix.len() && self.b.ends_with(suffix) {
            Some(self.b.len() - suffix.len())
        } else {
            None
        }
    }

    fn set_suffix(&mut self, stem_len: usize, replacement: &[u8]) {
        self.b.truncate(stem_len);
        self.b.extend_from_slice(replacement);
    }

    /// Plurals: sses -> ss, ies -> i, s -> (drop).
    fn step1a(&mut self) {
        if let Some(j) = self.ends(b"sses") {
            self.set_suffix(j, b"ss");
        } else if let Some(j) = self.ends(b"ies") {
            self.set_suffix(j, b"i");
        } else if self.ends(b"ss").is_some() {
            // keep
        } else if self.ends(b"s").is_some() {
            self.b.pop();
        }
    }

    /// Past tense / gerund: eed, ed, ing.
    fn step1b(&mut self) {
        if let Some(j) = self.ends(b"eed") {
            if self.measure(j) > 0 {
                self.b.pop();
            }
            return;
        }

        let mut stripped = false;
        if let Some(j) = self.ends(b"ed") {
            if self.has_vowel(j) {
                self.b.truncate(j);
                stripped = true;
            }
        } else if let Some(j) = self.ends(b"ing") {
            if self.has_vowel(j) {
                self.b.truncate(j);
                stripped = true;
            }
        }

        if stripped {
            if self.ends(b"at").is_some() || self.ends(b"bl").is_some() || self.ends(b"iz").is_some()
            {
                self.b.push(b'e');
            } else if self.double_consonant(self.b.len())
                && !matches!(self.b[self.b.len() - 1], b'l' | b's' | b'z')
            {
                self.b.pop();
            } else if self.measure(self.b.len()) == 1 && self.ends_cvc(self.b.len()) {
                self.b.push(b'e');
            }
        }
    }

    /// Terminal y -> i when the stem contains a vowel.
    fn step1c(&mut self) {
        if let Some(j) = self.ends(b"y") {
            if self.has_vowel(j) {
                let last = self.b.len() - 1;
                self.b[last] = b'i';
            }
        }
    }

    fn replace_if(&mut self, pairs: &[(&[u8], &[u8])]) {
        for (suffix, replacement) in pairs {
            if let Some(j) = self.ends(suffix) {
                if self.measure(j) > 0 {
                    self.set_suffix(j, replacement);
                }
                return;
            }
        }
    }

    /// Double suffixes: ational -> ate, ization -> ize, etc.
    fn step2(&mut self) {
        // Longest suffixes first so e.g. "ization" wins over "ation".
        const PAIRS: &[(&[u8], &[u8])] = &[
            (b"ational", b"ate"),
            (b"ization", b"ize"),
            (b"iveness", b"ive"),
            (b"fulness", b"ful"),
            (b"ousness", b"ous"),
            (b"tional", b"tion"),
            (b"biliti", b"ble"),
            (b"entli", b"ent"),
            (b"ousli", b"ous"),
            (b"ation", b"ate"),
            (b"alism", b"al"),
            (b"aliti", b"al"),
            (b"iviti", b"ive"),
            (b"enci", b"ence"),
            (b"anci", b"ance"),
            (b"izer", b"ize"),
            (b"abli", b"able"),
            (b"alli", b"al"),
            (b"ator", b"ate"),
            (b"eli", b"e"),
        ];
        self.replace_if(PAIRS);
    }

    /// icate -> ic, ative -> (drop), ful/ness -> (drop), etc.
    fn step3(&mut self) {
        const PAIRS: &[(&[u8], &[u8])] = &[
            (b"icate", b"ic"),
            (b"ative", b""),
            (b"alize", b"al"),
            (b"iciti", b"ic"),
            (b"ical", b"ic"),
            (b"ness", b""),
            (b"ful", b""),
        ];
        self.replace_if(PAIRS);
    }

    /// Strip residual suffixes when the remaining stem is long enough.
    fn step4(&mut self) {
        const SUFFIXES: &[&[u8]] = &[
            b"ement", b"ance", b"ence", b"able", b"ible", b"ment", b"ant", b"ent", b"ism", b"ate",
            b"iti", b"ous", b"ive", b"ize", b"ion", b"al", b"er", b"ic", b"ou",
        ];
        for suffix in SUFFIXES {
            if let Some(j) = self.ends(suffix) {
                // "ion" only drops after s or t (e.g. "decision", "adoption").
                if *suffix == b"ion" && !(j > 0 && matches!(self.b[j - 1], b's' | b't')) {
                    continue;
                }
                if self.measure(j) > 1 {
                    self.b.truncate(j);
                }
                return;
            }
        }
    }

    /// Tidy up: drop a final e and un-double a final ll.
    fn step5(&mut self) {
        if self.ends(b"e").is_some() {
            let j = self.b.len() - 1;
            let m = self.measure(j);
            if m > 1 || (m == 1 && !self.ends_cvc(j)) {
                self.b.pop();
            }
        }
        let len = self.b.len();
        if self.measure(len) > 1 && self.double_consonant(len) && self.b[len - 1] == b'l' {
            self.b.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plurals() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("parameters"), "paramet");
    }

    #[test]
    fn test_ed_ing() {
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("plating"), "plate");
        assert_eq!(stem("motoring"), "motor");
        assert_eq!(stem("sing"), "sing");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("falling"), "fall");
        assert_eq!(stem("filing"), "file");
    }

    #[test]
    fn test_y_to_i() {
        assert_eq!(stem("italy"), "itali");
        assert_eq!(stem("empty"), "empti");
        assert_eq!(stem("country"), "countri");
        assert_eq!(stem("by"), "by");
    }

    #[test]
    fn test_multi_step() {
        assert_eq!(stem("compatibility"), "compat");
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("installation"), "instal");
        assert_eq!(stem("numeric"), "numer");
        assert_eq!(stem("usage"), "usag");
        assert_eq!(stem("dataframe"), "datafram");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(stem("Installation"), "instal");
        assert_eq!(stem("THE"), "the");
    }

    #[test]
    fn test_identifiers_and_digits() {
        // Identifier-ish words flow through the same suffix rules the
        // generator applies to them.
        assert_eq!(stem("to_pandas"), "to_panda");
        assert_eq!(stem("create_meal_df"), "create_meal_df");
        assert_eq!(stem("18"), "18");
        assert_eq!(stem("5"), "5");
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("df"), "df");
    }
}
