use alloc::string::{String, ToString};
use rand::Rng;

use crate::*;

const NAME: &str = "{name}";

const MINE_TAUNTS: &[&str] = &[
    "{name} found the mine the hard way",
    "{name} got swept",
    "{name} started the fireworks early",
    "sweep your own minefield, {name}",
    "{name} stepped where nobody should step",
];

const LINE_TAUNTS: &[&str] = &[
    "{name} tacked when they should have ticked",
    "{name} got tic-tac-toed",
    "three in a row, {name} is out of the show",
];

const CROSS_TAUNTS: &[&str] = &[
    "{name} got crossed out",
    "X marks the spot where {name} lost",
];

const NOUGHT_TAUNTS: &[&str] = &["{name} scored a big fat O", "O no, {name}"];

fn symbol_taunts(symbol: Symbol) -> &'static [&'static str] {
    match symbol {
        Symbol::Cross => CROSS_TAUNTS,
        Symbol::Nought => NOUGHT_TAUNTS,
    }
}

/// Picks a game-over line aimed at the loser of `result`.
pub(crate) fn pick<R: Rng + ?Sized>(result: &GameResult, rng: &mut R) -> String {
    let (general, extra): (&[&str], &[&str]) = match result {
        GameResult::Lost { .. } => (MINE_TAUNTS, &[]),
        GameResult::Won { line, .. } => (LINE_TAUNTS, symbol_taunts(line.symbol)),
    };
    let index = rng.random_range(0..general.len() + extra.len());
    let template = general.iter().chain(extra).nth(index).copied().unwrap_or(NAME);
    template.replace(NAME, &result.loser().to_string())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn line_win(symbol: Symbol) -> GameResult {
        GameResult::Won {
            winner: PlayerId(0),
            loser: PlayerId(1),
            line: Line {
                origin: (5, 5),
                direction: Direction::new(1, 0),
                symbol,
            },
        }
    }

    #[test]
    fn mine_taunts_name_the_loser() {
        let result = GameResult::Lost {
            loser: PlayerId(2),
            winner: PlayerId(0),
            mine: (1, 1),
        };
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..20 {
            let taunt = pick(&result, &mut rng);
            assert!(taunt.contains("player 3"), "{taunt}");
            assert!(!taunt.contains(NAME));
            assert!(MINE_TAUNTS.iter().any(|t| *t == taunt.replace("player 3", NAME)));
        }
    }

    #[test]
    fn line_taunts_draw_from_symbol_extras() {
        let result = line_win(Symbol::Nought);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let template = pick(&result, &mut rng).replace("player 2", NAME);
            assert!(
                LINE_TAUNTS.contains(&template.as_str())
                    || NOUGHT_TAUNTS.contains(&template.as_str()),
                "{template}"
            );
            assert!(!CROSS_TAUNTS.contains(&template.as_str()));
        }
    }
}
