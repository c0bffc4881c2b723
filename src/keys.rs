use std::collections::VecDeque;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeySequence {
    keys: VecDeque<String>,
}

impl KeySequence {
    pub fn push(&mut self, key: &str, bound: usize, word: &str) -> bool {
        if word.is_empty() || bound == 0 {
            return false;
        }
        self.keys.push_back(key.to_uppercase());
        while self.keys.len() > bound {
            self.keys.pop_front();
        }
        let joined: String = self.keys.iter().map(String::as_str).collect();
        if joined == word.to_uppercase() {
            self.keys.clear();
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedText {
    text: String,
}

impl TypedText {
    pub fn push(&mut self, key: &str, needle: &str, limit: usize, keep: usize) -> bool {
        self.text.push_str(key);
        let matched =
            !needle.is_empty() && self.text.to_lowercase().contains(&needle.to_lowercase());
        if matched {
            self.text.clear();
        }
        let count = self.text.chars().count();
        if count > limit {
            let keep = keep.min(limit);
            self.text = self.text.chars().skip(count.saturating_sub(keep)).collect();
        }
        matched
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
