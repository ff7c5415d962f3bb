//! Tokens shared between syntax trees and the maps that relate two scans of the same text.

mod token;
mod token_map;


pub use text_size::{TextRange, TextSize};
pub use token::{Token, TokenData};
pub use token_map::TokenMap;
