//! The game engine.
//!
//! `GameEngine` owns every tile of the set, split across the two hands, the
//! stock, and the chain. All mutation goes through its methods, and each
//! applied move is followed by an invariant check and status evaluation.
//!
//! ## Usage
//!
//! ```
//! use dominoes::rules::{GameEngine, Status};
//! use dominoes::core::Seat;
//! use dominoes::zones::TileContainer;
//!
//! let mut engine = GameEngine::new_game(42).unwrap();
//!
//! while engine.status() == Status::InProgress && engine.turn_number() < 200 {
//!     match engine.turn() {
//!         Seat::Computer => {
//!             engine.computer_turn().unwrap();
//!         }
//!         Seat::Player => {
//!             // Draw until something fits, then play it.
//!             let mv = (1..=engine.player_hand().len() as i32)
//!                 .flat_map(|i| [i, -i])
//!                 .find(|&m| engine.validate_command(&m.to_string()).is_ok())
//!                 .unwrap_or(0);
//!             engine.submit_human_move(&mv.to_string()).unwrap();
//!         }
//!     }
//! }
//! ```

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{
    DominoError, End, GameConfig, GameRng, Move, MoveRecord, Rejection, Result, Seat, SeatMap,
    Tile, FULL_SET_SIZE, HAND_SIZE,
};
use crate::policy::{MovePolicy, RarityHeuristic};
use crate::zones::{Chain, TileContainer, TileSet};

use super::terminal::{self, Status};

/// Two-player domino game state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    hands: SeatMap<TileSet>,
    stock: TileSet,
    chain: Chain,

    /// Whose move it is.
    turn: Seat,

    status: Status,

    /// Moves applied so far plus one (starts at 1).
    turn_number: u32,

    /// Opening double (turn 0) and every applied move.
    history: Vector<MoveRecord>,
}

impl GameEngine {
    /// Deal a new game from `seed` with default settings.
    pub fn new_game(seed: u64) -> Result<Self> {
        Self::new(&GameConfig::new(seed))
    }

    /// Deal a new game.
    ///
    /// Each attempt deals 7 tiles to the computer and 7 to the player from a
    /// fresh full set. The hand holding the higher double opens with it and
    /// the other side moves first. Deals where no hand has a double, or both
    /// hold equal doubles, are thrown away and redealt from the same RNG.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let mut rng = GameRng::new(config.seed);

        for attempt in 1..=config.max_deal_attempts {
            let mut stock = TileSet::full();
            let computer = stock.sample_and_remove(HAND_SIZE, &mut rng)?;
            let player = stock.sample_and_remove(HAND_SIZE, &mut rng)?;
            let hands = SeatMap::from_values(player, computer);

            let Some((opener, index)) = Self::opening_double(&hands) else {
                log::warn!("deal {attempt}: no opening double decided, redealing");
                continue;
            };

            let mut engine = Self {
                hands,
                stock,
                chain: Chain::default(),
                turn: opener,
                status: Status::InProgress,
                turn_number: 0,
                history: Vector::new(),
            };
            engine.play(opener, index, End::Right);
            engine.turn = opener.other();
            engine.turn_number = 1;
            engine.verify_invariants();

            log::info!(
                "seed {} deal {}: {} opens with {}, {} to move",
                rng.seed(),
                attempt,
                opener,
                engine.chain,
                engine.turn
            );
            return Ok(engine);
        }

        Err(DominoError::InitializationDeadlock {
            attempts: config.max_deal_attempts,
        })
    }

    /// The seat and hand index of the opening double, if the deal decides one.
    fn opening_double(hands: &SeatMap<TileSet>) -> Option<(Seat, usize)> {
        let largest = |seat: Seat| hands[seat].largest_double().map(Tile::first);

        let opener = match (largest(Seat::Player), largest(Seat::Computer)) {
            (Some(_), None) => Seat::Player,
            (None, Some(_)) => Seat::Computer,
            (Some(p), Some(c)) if p > c => Seat::Player,
            (Some(p), Some(c)) if c > p => Seat::Computer,
            _ => return None,
        };

        let double = hands[opener].largest_double()?;
        let index = hands[opener].iter().position(|tile| tile == double)?;
        Some((opener, index))
    }

    /// Build an engine from explicit containers.
    ///
    /// The stock receives every remaining piece of the full set, in full-set
    /// order. Fails if a piece appears twice or the chain does not connect.
    pub fn from_position(
        player: TileSet,
        computer: TileSet,
        chain: Chain,
        turn: Seat,
    ) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for tile in player.iter().chain(computer.iter()).chain(chain.iter()) {
            if !seen.insert(tile.key()) {
                return Err(DominoError::InvalidPosition(format!("piece {tile} appears twice")));
            }
        }
        if !chain.is_connected() {
            return Err(DominoError::InvalidPosition(format!("chain {chain} does not connect")));
        }

        let full = TileSet::full();
        let stock = TileSet::from_tiles(
            full.iter()
                .copied()
                .filter(|tile| !seen.contains(&tile.key())),
        );
        let hands = SeatMap::from_values(player, computer);
        let status = terminal::evaluate(&hands, &chain);

        Ok(Self {
            hands,
            stock,
            chain,
            turn,
            status,
            turn_number: 1,
            history: Vector::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The seat to move.
    #[must_use]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &TileSet {
        &self.hands[seat]
    }

    #[must_use]
    pub fn player_hand(&self) -> &TileSet {
        self.hand(Seat::Player)
    }

    #[must_use]
    pub fn computer_hand(&self) -> &TileSet {
        self.hand(Seat::Computer)
    }

    #[must_use]
    pub fn stock(&self) -> &TileSet {
        &self.stock
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Open values at the (left, right) ends of the chain.
    #[must_use]
    pub fn current_open_ends(&self) -> Option<(u8, u8)> {
        self.chain.open_ends()
    }

    /// Opening double and applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Legality ===

    /// Check if `mv` is legal for the seat to move.
    ///
    /// A draw is always legal. Otherwise the indexed tile must carry the open
    /// value of the selected end. Indices outside the hand are not legal.
    #[must_use]
    pub fn can_attach(&self, mv: Move) -> bool {
        self.fits(self.turn, mv)
    }

    fn fits(&self, seat: Seat, mv: Move) -> bool {
        match (mv.hand_index(), mv.end()) {
            (Some(index), Some(end)) => self.hands[seat]
                .get(index)
                .is_some_and(|tile| self.chain.accepts(tile, end)),
            _ => true,
        }
    }

    fn check_move(&self, seat: Seat, mv: Move) -> Result<()> {
        let hand_size = self.hands[seat].len();
        if mv.hand_index().is_some_and(|index| index >= hand_size) {
            return Err(Rejection::OutOfRange { hand_size }.into());
        }
        if !self.fits(seat, mv) {
            return Err(Rejection::IllegalMove.into());
        }
        Ok(())
    }

    /// Parse and validate a human command against the player's hand.
    ///
    /// Accepts a signed integer whose magnitude is at most the hand size and
    /// whose tile fits the selected end.
    pub fn validate_command(&self, command: &str) -> Result<Move> {
        let mv: Move = command.parse()?;
        self.check_move(Seat::Player, mv)?;
        Ok(mv)
    }

    // === Turns ===

    /// Validate and apply a human command.
    pub fn submit_human_move(&mut self, command: &str) -> Result<Move> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver.into());
        }
        if self.turn != Seat::Player {
            return Err(Rejection::NotYourTurn.into());
        }
        let mv = self.validate_command(command)?;
        self.apply_move(mv)?;
        Ok(mv)
    }

    /// Let the default heuristic choose and apply the computer's move.
    pub fn computer_turn(&mut self) -> Result<Move> {
        self.computer_turn_with(&RarityHeuristic)
    }

    /// Let `policy` choose and apply the computer's move.
    pub fn computer_turn_with(&mut self, policy: &impl MovePolicy) -> Result<Move> {
        if self.status.is_terminal() || self.turn != Seat::Computer {
            return Err(DominoError::OutOfTurn);
        }
        let mv = policy.select(&self.hands[Seat::Computer], &self.chain);
        self.apply_move(mv)?;
        Ok(mv)
    }

    /// Apply `mv` for the seat to move, pass the turn, and re-evaluate.
    ///
    /// `0` moves the last stock tile into the hand (a pass when the stock is
    /// empty). Any other move transfers the indexed tile onto the chain.
    /// The turn passes in every case.
    pub fn apply_move(&mut self, mv: Move) -> Result<Status> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver.into());
        }
        let seat = self.turn;
        self.check_move(seat, mv)?;

        let tile = match (mv.hand_index(), mv.end()) {
            (Some(index), Some(end)) => self.play(seat, index, end),
            _ => self.draw(seat),
        };

        log::debug!(
            "turn {}: {} {} -> {}",
            self.turn_number,
            seat,
            mv,
            tile.map_or_else(|| "pass".to_string(), |t| t.to_string())
        );

        self.turn = seat.other();
        self.turn_number += 1;
        self.verify_invariants();

        self.status = self.check_end();
        if self.status.is_terminal() {
            log::info!("game over after {} turns: {:?}", self.turn_number - 1, self.status);
        }
        Ok(self.status)
    }

    /// Move a tile from `seat`'s hand onto the chain and record it.
    ///
    /// Returns the tile as laid, after orientation fixup.
    fn play(&mut self, seat: Seat, index: usize, end: End) -> Option<Tile> {
        let tile = self.hands[seat].remove(index)?;
        self.chain.append(tile, end);

        let placed = match end {
            End::Right => self.chain.tiles().back(),
            End::Left => self.chain.tiles().front(),
        }
        .copied();

        self.history.push_back(MoveRecord {
            seat,
            mv: Move::attach(index + 1, end),
            tile: placed,
            turn: self.turn_number,
        });
        placed
    }

    /// Move the last stock tile into `seat`'s hand and record it.
    fn draw(&mut self, seat: Seat) -> Option<Tile> {
        let tile = self.stock.pop_back();
        if let Some(tile) = tile {
            self.hands[seat].append(tile, End::Right);
        }

        self.history.push_back(MoveRecord {
            seat,
            mv: Move::DRAW,
            tile,
            turn: self.turn_number,
        });
        tile
    }

    /// Evaluate terminal conditions for the current position.
    #[must_use]
    pub fn check_end(&self) -> Status {
        terminal::evaluate(&self.hands, &self.chain)
    }

    /// Panics if a piece is missing, duplicated, or the chain is broken.
    fn verify_invariants(&self) {
        let mut seen = FxHashSet::default();
        let all = self
            .hands
            .iter()
            .flat_map(|(_, hand)| hand.iter())
            .chain(self.stock.iter())
            .chain(self.chain.iter());

        for tile in all {
            assert!(seen.insert(tile.key()), "piece {tile} is in two containers");
        }
        assert_eq!(seen.len(), FULL_SET_SIZE, "pieces missing from the game");
        assert!(self.chain.is_connected(), "chain does not connect: {}", self.chain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(a: i64, b: i64) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn set(pairs: &[(i64, i64)]) -> TileSet {
        TileSet::from_tiles(pairs.iter().map(|&(a, b)| tile(a, b)))
    }

    fn played(pairs: &[(i64, i64)]) -> Chain {
        Chain::from_played(pairs.iter().map(|&(a, b)| tile(a, b)))
    }

    #[test]
    fn test_new_game_deal() {
        let engine = GameEngine::new_game(42).unwrap();

        assert_eq!(engine.status(), Status::InProgress);
        assert_eq!(engine.chain().len(), 1);
        assert_eq!(engine.stock().len(), 14);
        assert_eq!(engine.player_hand().len() + engine.computer_hand().len(), 13);
        assert!(engine.chain().get(0).unwrap().is_double());
        assert_eq!(engine.turn_number(), 1);
    }

    #[test]
    fn test_opener_is_other_side() {
        let engine = GameEngine::new_game(7).unwrap();
        let opening = &engine.history()[0];

        assert_eq!(opening.turn, 0);
        assert_eq!(engine.turn(), opening.seat.other());
        assert_eq!(engine.hand(opening.seat).len(), 6);
        assert_eq!(engine.hand(engine.turn()).len(), 7);
    }

    #[test]
    fn test_opening_double_rules() {
        let hands = SeatMap::from_values(set(&[(5, 5), (0, 1)]), set(&[(1, 2), (6, 6), (3, 3)]));
        assert_eq!(GameEngine::opening_double(&hands), Some((Seat::Computer, 1)));

        let hands = SeatMap::from_values(set(&[(0, 1), (2, 2)]), set(&[(1, 2)]));
        assert_eq!(GameEngine::opening_double(&hands), Some((Seat::Player, 1)));

        let hands = SeatMap::from_values(set(&[(0, 1)]), set(&[(1, 2)]));
        assert_eq!(GameEngine::opening_double(&hands), None);
    }

    #[test]
    fn test_equal_doubles_redeal() {
        // Impossible in a real deal, but the rule must not pick a side.
        let hands = SeatMap::from_values(set(&[(4, 4)]), set(&[(4, 4)]));
        assert_eq!(GameEngine::opening_double(&hands), None);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameEngine::new_game(1234).unwrap();
        let b = GameEngine::new_game(1234).unwrap();

        assert_eq!(a.player_hand(), b.player_hand());
        assert_eq!(a.computer_hand(), b.computer_hand());
        assert_eq!(a.stock(), b.stock());
        assert_eq!(a.turn(), b.turn());
    }

    #[test]
    fn test_from_position_fills_stock() {
        let engine = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(2, 3)]),
            played(&[(6, 6)]),
            Seat::Player,
        )
        .unwrap();

        assert_eq!(engine.stock().len(), 25);
        assert!(!engine.stock().contains_piece(&tile(1, 0)));
        assert_eq!(engine.stock().get(0), Some(&tile(0, 0)));
        assert_eq!(engine.current_open_ends(), Some((6, 6)));
    }

    #[test]
    fn test_from_position_rejects_duplicates() {
        let result = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(1, 0)]),
            played(&[(6, 6)]),
            Seat::Player,
        );
        assert!(matches!(result, Err(DominoError::InvalidPosition(_))));
    }

    #[test]
    fn test_from_position_rejects_broken_chain() {
        let result = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(2, 3)]),
            played(&[(6, 6), (5, 4)]),
            Seat::Player,
        );
        assert!(matches!(result, Err(DominoError::InvalidPosition(_))));
    }

    #[test]
    fn test_can_attach() {
        let engine = GameEngine::from_position(
            set(&[(0, 1), (4, 6), (2, 3)]),
            set(&[(5, 5)]),
            played(&[(4, 2)]),
            Seat::Player,
        )
        .unwrap();

        assert!(engine.can_attach(Move::DRAW));
        assert!(engine.can_attach(Move(-2)));
        assert!(!engine.can_attach(Move(2)));
        assert!(engine.can_attach(Move(3)));
        assert!(!engine.can_attach(Move(1)));
        assert!(!engine.can_attach(Move(9)));
    }

    #[test]
    fn test_apply_draw_passes_turn() {
        let mut engine = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(2, 3)]),
            played(&[(6, 6)]),
            Seat::Player,
        )
        .unwrap();

        let last_stock = *engine.stock().get(engine.stock().len() - 1).unwrap();
        engine.apply_move(Move::DRAW).unwrap();

        assert_eq!(engine.player_hand().len(), 2);
        assert_eq!(engine.player_hand().get(1), Some(&last_stock));
        assert_eq!(engine.turn(), Seat::Computer);
        assert_eq!(engine.history().back().unwrap().tile, Some(last_stock));
    }

    #[test]
    fn test_apply_play_orients_tile() {
        let mut engine = GameEngine::from_position(
            set(&[(0, 1), (6, 4)]),
            set(&[(2, 3)]),
            played(&[(4, 2)]),
            Seat::Player,
        )
        .unwrap();

        engine.apply_move(Move(-2)).unwrap();

        assert_eq!(engine.chain().values_string(), "[[6, 4], [4, 2]]");
        assert_eq!(engine.current_open_ends(), Some((6, 2)));
        assert_eq!(engine.turn(), Seat::Computer);
    }

    #[test]
    fn test_apply_illegal_is_rejected() {
        let mut engine = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(2, 3)]),
            played(&[(6, 6)]),
            Seat::Player,
        )
        .unwrap();

        assert_eq!(
            engine.apply_move(Move(1)),
            Err(DominoError::RejectedCommand(Rejection::IllegalMove))
        );
        assert_eq!(engine.turn(), Seat::Player);
    }

    #[test]
    fn test_computer_out_of_turn() {
        let mut engine = GameEngine::from_position(
            set(&[(0, 1)]),
            set(&[(2, 3)]),
            played(&[(6, 6)]),
            Seat::Player,
        )
        .unwrap();

        assert_eq!(engine.computer_turn(), Err(DominoError::OutOfTurn));
    }
}
