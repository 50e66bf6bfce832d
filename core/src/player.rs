use core::fmt;
use serde::{Deserialize, Serialize};

/// Zero-based seat index of a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next seat in turn order, wrapping around after `players`.
    pub const fn next(self, players: u8) -> PlayerId {
        PlayerId((self.0 + 1) % players)
    }

    /// Mark this player leaves on flagged cells.
    pub const fn symbol(self) -> Symbol {
        if self.0 % 2 == 0 {
            Symbol::Cross
        } else {
            Symbol::Nought
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // players are numbered from 1 when shown to humans
        write!(f, "player {}", u16::from(self.0) + 1)
    }
}

/// Tic-tac-toe mark shared by everyone seated on the same parity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Cross,
    Nought,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cross => "X",
            Self::Nought => "O",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn turns_rotate_through_every_seat() {
        let mut player = PlayerId::FIRST;
        player = player.next(3);
        assert_eq!(player, PlayerId(1));
        player = player.next(3);
        assert_eq!(player, PlayerId(2));
        player = player.next(3);
        assert_eq!(player, PlayerId::FIRST);
    }

    #[test]
    fn first_two_players_get_distinct_symbols() {
        assert_eq!(PlayerId(0).symbol(), Symbol::Cross);
        assert_eq!(PlayerId(1).symbol(), Symbol::Nought);
        assert_eq!(PlayerId(2).symbol(), Symbol::Cross);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(PlayerId(0).to_string(), "player 1");
        assert_eq!(Symbol::Nought.to_string(), "O");
    }
}
