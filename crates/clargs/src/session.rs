use crate::spec::is_switch_shaped;

/// Per-call parsing state: the tokens and which of them have been claimed.
///
/// Token 0 is the program name and is never handed out by the scanning
/// helpers below.
#[derive(Debug, Clone)]
pub struct ParseSession<'a> {
    tokens: &'a [String],
    occupied: Vec<bool>,
}

impl<'a> ParseSession<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens,
            occupied: vec![false; tokens.len()],
        }
    }

    pub fn program_name(&self) -> &'a str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied.get(index).copied().unwrap_or(false)
    }

    pub fn occupy(&mut self, index: usize) {
        if let Some(slot) = self.occupied.get_mut(index) {
            *slot = true;
        }
    }

    /// Whether `index` exists, is free, and is not switch-shaped.
    pub fn is_value_candidate(&self, index: usize) -> bool {
        match self.token(index) {
            Some(token) => !self.is_occupied(index) && !is_switch_shaped(token),
            None => false,
        }
    }

    /// Unclaimed tokens after the program name, in order.
    pub fn unclaimed(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(idx, _)| !self.occupied[*idx])
            .map(|(idx, token)| (idx, token.as_str()))
    }
}
