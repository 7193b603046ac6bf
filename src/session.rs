use crate::tic_tac_toe::BoardError;
use thiserror::Error;

/// Phases of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingRoundStart,
    InRound,
    RoundResolved,
    AwaitingPlayAgain,
    SessionOver,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session phase error: expected {expected:?}, found {found:?}")]
    Phase {
        expected: SessionPhase,
        found: SessionPhase,
    },
}

/// Errors a game controller can surface. Input re-prompting recovers
/// malformed answers locally; everything here is fatal.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result of a single resolved round, from the human's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    HumanWin,
    ComputerWin,
    Draw,
}

/// Per-session win/loss/draw counters, reset only at process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::HumanWin => self.wins += 1,
            RoundOutcome::ComputerWin => self.losses += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Round-based session state machine shared by all three games:
/// `AwaitingRoundStart → InRound → RoundResolved →
/// (AwaitingPlayAgain → AwaitingRoundStart | SessionOver)`.
///
/// Calls out of phase are contract violations and return `SessionError`
/// rather than being silently recovered.
#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    pub score: Scoreboard,
}

impl Session {
    pub fn new() -> Self {
        Session {
            phase: SessionPhase::AwaitingRoundStart,
            score: Scoreboard::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::SessionOver
    }

    fn expect(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::Phase {
                expected,
                found: self.phase,
            })
        }
    }

    /// `AwaitingRoundStart → InRound`
    pub fn begin_round(&mut self) -> Result<(), SessionError> {
        self.expect(SessionPhase::AwaitingRoundStart)?;
        self.phase = SessionPhase::InRound;
        Ok(())
    }

    /// `InRound → RoundResolved`; runs exactly once per round and is the
    /// only place the scoreboard is incremented.
    pub fn resolve(&mut self, outcome: RoundOutcome) -> Result<(), SessionError> {
        self.expect(SessionPhase::InRound)?;
        self.score.record(outcome);
        self.phase = SessionPhase::RoundResolved;
        Ok(())
    }

    /// `RoundResolved → AwaitingPlayAgain`
    pub fn request_play_again(&mut self) -> Result<(), SessionError> {
        self.expect(SessionPhase::RoundResolved)?;
        self.phase = SessionPhase::AwaitingPlayAgain;
        Ok(())
    }

    /// `AwaitingPlayAgain → AwaitingRoundStart` on yes, `SessionOver` on no
    pub fn play_again(&mut self, again: bool) -> Result<(), SessionError> {
        self.expect(SessionPhase::AwaitingPlayAgain)?;
        self.phase = if again {
            SessionPhase::AwaitingRoundStart
        } else {
            SessionPhase::SessionOver
        };
        Ok(())
    }

    /// End the session without a play-again prompt: a threshold or stake
    /// bound was reached after resolution, or the session never started.
    pub fn end(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::RoundResolved | SessionPhase::AwaitingRoundStart => {
                self.phase = SessionPhase::SessionOver;
                Ok(())
            }
            found => Err(SessionError::Phase {
                expected: SessionPhase::RoundResolved,
                found,
            }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_session_path() {
        let mut session = Session::new();
        assert_eq!(session.phase(), SessionPhase::AwaitingRoundStart);

        session.begin_round().unwrap();
        assert_eq!(session.phase(), SessionPhase::InRound);

        session.resolve(RoundOutcome::HumanWin).unwrap();
        assert_eq!(session.phase(), SessionPhase::RoundResolved);
        assert_eq!(session.score.wins, 1);

        session.request_play_again().unwrap();
        session.play_again(true).unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingRoundStart);

        session.begin_round().unwrap();
        session.resolve(RoundOutcome::Draw).unwrap();
        session.request_play_again().unwrap();
        session.play_again(false).unwrap();
        assert!(session.is_over());
        assert_eq!(session.score.rounds(), 2);
    }

    #[test]
    fn test_resolve_out_of_phase_is_an_error() {
        let mut session = Session::new();
        let err = session.resolve(RoundOutcome::Draw).unwrap_err();
        match err {
            SessionError::Phase { expected, found } => {
                assert_eq!(expected, SessionPhase::InRound);
                assert_eq!(found, SessionPhase::AwaitingRoundStart);
            }
        }
    }

    #[test]
    fn test_double_resolve_rejected() {
        let mut session = Session::new();
        session.begin_round().unwrap();
        session.resolve(RoundOutcome::HumanWin).unwrap();
        assert!(session.resolve(RoundOutcome::HumanWin).is_err());
        assert_eq!(session.score.wins, 1, "scoreboard must increment once per round");
    }

    #[test]
    fn test_end_after_resolution() {
        let mut session = Session::new();
        session.begin_round().unwrap();
        session.resolve(RoundOutcome::ComputerWin).unwrap();
        session.end().unwrap();
        assert!(session.is_over());
    }

    #[test]
    fn test_end_before_first_round() {
        // A misconfigured stake bound can terminate before any round starts
        let mut session = Session::new();
        session.end().unwrap();
        assert!(session.is_over());
    }

    #[test]
    fn test_no_transitions_out_of_session_over() {
        let mut session = Session::new();
        session.end().unwrap();
        assert!(session.begin_round().is_err());
        assert!(session.end().is_err());
    }

    #[test]
    fn test_scoreboard_counts_by_outcome() {
        let mut score = Scoreboard::default();
        score.record(RoundOutcome::HumanWin);
        score.record(RoundOutcome::ComputerWin);
        score.record(RoundOutcome::ComputerWin);
        score.record(RoundOutcome::Draw);
        assert_eq!((score.wins, score.losses, score.draws), (1, 2, 1));
        assert_eq!(score.rounds(), 4);
    }
}
