use alloc::string::{String, ToString};
use log::{debug, info};
use rand::Rng;

use crate::{
    common::{FireOutcome, GameError},
    config::{FLEET_LEN, FLEET_ORDER},
    player::{Player, PlayerId},
    ship::{Orientation, ShipId, ShipKind},
    view::{BoardView, Visibility},
};

/// Top-level stage of a game. Phases only ever move forward, in declaration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    SetupPlayer1,
    SetupPlayer2,
    Gameplay,
    GameOver,
}

impl Phase {
    /// The seat placing ships in this phase, if it is a setup phase.
    pub fn setup_player(self) -> Option<PlayerId> {
        match self {
            Phase::SetupPlayer1 => Some(PlayerId::First),
            Phase::SetupPlayer2 => Some(PlayerId::Second),
            Phase::Gameplay | Phase::GameOver => None,
        }
    }
}

/// Result of an accepted `fire` call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireResult {
    pub outcome: FireOutcome,
    /// Kind of the ship this shot destroyed, if it destroyed one.
    pub sunk: Option<ShipKind>,
    pub game_over: bool,
    pub winner: Option<String>,
}

/// Two-player game: setup for each player, then alternating fire until one
/// fleet is gone. The engine is the only thing that moves phase and turn.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 2],
    phase: Phase,
    current: PlayerId,
    next_ship: usize,
    winner: Option<PlayerId>,
    turns: usize,
}

impl GameEngine {
    /// Start a game in `SetupPlayer1` with player one's fleet queued.
    pub fn new(first: &str, second: &str) -> Result<Self, GameError> {
        let players = [Player::new(first)?, Player::new(second)?];
        info!(
            "new game: {} vs {}",
            players[0].name(),
            players[1].name()
        );
        Ok(Self {
            players,
            phase: Phase::SetupPlayer1,
            current: PlayerId::First,
            next_ship: 0,
            winner: None,
            turns: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The seat expected to act next: the placing player during setup, the
    /// shooter during gameplay, the winner once the game is over.
    pub fn current_player(&self) -> PlayerId {
        self.phase.setup_player().unwrap_or(self.current)
    }

    pub fn current_turn_player_name(&self) -> &str {
        self.player(self.current_player()).name()
    }

    /// Kind of the next ship to place, or `None` outside setup.
    pub fn current_placement_kind(&self) -> Option<ShipKind> {
        self.remaining_to_place().first().copied()
    }

    /// Ship kinds still to be placed by the player in setup, in order.
    pub fn remaining_to_place(&self) -> &'static [ShipKind] {
        let order: &'static [ShipKind] = &FLEET_ORDER;
        match self.phase.setup_player() {
            Some(_) => &order[self.next_ship..],
            None => &[],
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|id| self.player(id).name())
    }

    /// Number of accepted (hit or miss) shots so far.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    fn setup_seat(&self) -> Result<PlayerId, GameError> {
        match self.phase {
            Phase::GameOver => Err(GameError::GameAlreadyOver),
            phase => phase.setup_player().ok_or(GameError::WrongPhase),
        }
    }

    /// Place the pending ship for the player in setup. On failure nothing
    /// changes and the same ship stays pending.
    pub fn place_next_ship(
        &mut self,
        origin: (usize, usize),
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        let seat = self.setup_seat()?;
        let kind = FLEET_ORDER[self.next_ship];
        let id = self.players[seat.index()]
            .board_mut()
            .place_ship(kind, origin, orientation)?;
        debug!(
            "{} placed {} at {:?} {:?}",
            seat, kind, origin, orientation
        );
        self.advance_setup();
        Ok(id)
    }

    /// Place the pending ship at a random legal position.
    pub fn place_next_ship_random<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(ShipId, (usize, usize), Orientation), GameError> {
        let seat = self.setup_seat()?;
        let kind = FLEET_ORDER[self.next_ship];
        let (origin, orientation) = self.players[seat.index()]
            .board()
            .random_placement(rng, kind)?;
        let id = self.place_next_ship(origin, orientation)?;
        Ok((id, origin, orientation))
    }

    fn advance_setup(&mut self) {
        self.next_ship += 1;
        if self.next_ship < FLEET_LEN {
            return;
        }
        self.next_ship = 0;
        self.phase = match self.phase {
            Phase::SetupPlayer1 => Phase::SetupPlayer2,
            _ => Phase::Gameplay,
        };
        if self.phase == Phase::Gameplay {
            self.current = PlayerId::First;
        }
        info!("phase -> {:?}", self.phase);
    }

    /// Fire at the opponent's board for the current shooter. A repeat shot is
    /// reported as `AlreadyFired` and costs no turn.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, GameError> {
        match self.phase {
            Phase::Gameplay => {}
            Phase::GameOver => return Err(GameError::GameAlreadyOver),
            Phase::SetupPlayer1 | Phase::SetupPlayer2 => return Err(GameError::WrongPhase),
        }
        let shooter = self.current;
        let target = shooter.other();
        let defender = &mut self.players[target.index()];
        let outcome = defender.board_mut().fire_at(row, col)?;
        if outcome == FireOutcome::AlreadyFired {
            debug!("{} repeated shot at ({}, {})", shooter, row, col);
            return Ok(FireResult {
                outcome,
                sunk: None,
                game_over: false,
                winner: None,
            });
        }
        let sunk = defender
            .board()
            .ship_at(row, col)?
            .filter(|ship| ship.is_destroyed())
            .map(|ship| ship.kind());
        self.turns += 1;
        debug!(
            "{} fired at ({}, {}): {:?}{}",
            shooter,
            row,
            col,
            outcome,
            if sunk.is_some() { ", ship destroyed" } else { "" }
        );

        if defender.fleet_destroyed() {
            self.phase = Phase::GameOver;
            self.winner = Some(shooter);
            let name = self.player(shooter).name().to_string();
            info!("game over after {} shots, {} wins", self.turns, name);
            return Ok(FireResult {
                outcome,
                sunk,
                game_over: true,
                winner: Some(name),
            });
        }
        self.current = target;
        Ok(FireResult {
            outcome,
            sunk,
            game_over: false,
            winner: None,
        })
    }

    /// Snapshot of `id`'s board. Ships are shown to the active player for
    /// their own board and to everyone once the game is over; otherwise only
    /// fired-at cells are revealed.
    pub fn board_view(&self, id: PlayerId) -> BoardView {
        let visibility = if self.phase == Phase::GameOver || id == self.current_player() {
            Visibility::Owner
        } else {
            Visibility::Opponent
        };
        let player = self.player(id);
        BoardView::render(player.name(), player.board(), visibility)
    }
}
