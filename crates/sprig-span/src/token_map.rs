use rustc_hash::FxHashMap;

use crate::Token;

/// Correspondence from the tokens of a previous scan to their counterparts in a new one.
///
/// Keys are compared by identity: two equal-looking tokens from the old stream are
/// distinct entries. Each entry keeps its key token alive so the identity stays valid.
#[derive(Default, Debug, Clone)]
pub struct TokenMap {
    entries: FxHashMap<usize, (Token, Token)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps every token to itself.
    pub fn identity<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut map = Self::new();
        for token in tokens {
            map.insert(token, token.clone());
        }
        map
    }

    /// Pairs two token streams position by position.
    ///
    /// The shorter stream decides how many entries are created.
    pub fn zip<'a>(
        old: impl IntoIterator<Item = &'a Token>,
        new: impl IntoIterator<Item = &'a Token>,
    ) -> Self {
        let mut map = Self::new();
        for (old, new) in old.into_iter().zip(new) {
            map.insert(old, new.clone());
        }
        map
    }

    pub fn insert(&mut self, old: &Token, new: Token) -> Option<Token> {
        self.entries.insert(old.addr(), (old.clone(), new)).map(|(_, previous)| previous)
    }

    pub fn get(&self, old: &Token) -> Option<&Token> {
        self.entries.get(&old.addr()).map(|(_, new)| new)
    }

    /// Looks `old` up, falling back to `old` itself for tokens the map does not know.
    pub fn map(&self, old: &Token) -> Token {
        self.get(old).unwrap_or(old).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
