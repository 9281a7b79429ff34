//! Round progression across the three panels
//!
//! ```text
//! Loading -> Ready(0) -> Ready(1) -> Ready(2) -> Complete
//! ```
//!
//! Only solving the active round's panel moves the game forward, and the
//! next panel is built at that moment. Starting a new game throws away every
//! panel and bumps the game generation, so word fetches and validations that
//! belong to the old game are ignored when they come back.

use super::panel::{Panel, RevealSource, SubmitOutcome, ValidationTicket};
use super::triple::parse_triple;
use super::{GameError, ROUNDS};
use crate::core::{FeedbackRow, PuzzleWord};
use crate::services::{Dictionary, ServiceError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerStatus {
    /// Waiting for (or failed to get) the word triple
    Loading,
    /// The given round is active
    Ready(usize),
    /// All three rounds solved
    Complete,
}

/// Identifies one `new_game` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTicket {
    generation: u64,
}

/// A submission in flight for one round of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    game: u64,
    round: usize,
    validation: ValidationTicket,
}

impl SubmissionTicket {
    #[must_use]
    pub fn candidate(&self) -> &str {
        self.validation.candidate()
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}

/// What a resolved submission did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The answer was for an older word or game
    Stale,
    /// The dictionary rejected the candidate
    NotAWord { round: usize },
    /// Valid word, not fully correct
    Retry { round: usize, feedback: FeedbackRow },
    /// `solved` is done and `next` is now active
    Advanced { solved: usize, next: usize },
    /// The last round was solved; raised once per game
    GameComplete,
}

/// Controller for one three-round game
pub struct RoundSequencer<R = StdRng> {
    words: Option<[PuzzleWord; ROUNDS]>,
    panels: Vec<Panel>,
    status: SequencerStatus,
    last_error: Option<String>,
    generation: u64,
    completion_signaled: bool,
    reveal: R,
}

impl RoundSequencer<StdRng> {
    /// A sequencer that reveals uniformly random slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_reveal(StdRng::from_os_rng())
    }
}

impl Default for RoundSequencer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RevealSource> RoundSequencer<R> {
    /// A sequencer using `reveal` to choose each panel's revealed slot
    pub const fn with_reveal(reveal: R) -> Self {
        Self {
            words: None,
            panels: Vec::new(),
            status: SequencerStatus::Loading,
            last_error: None,
            generation: 0,
            completion_signaled: false,
            reveal,
        }
    }

    /// Drop the current game and wait for new words
    pub fn begin_new_game(&mut self) -> GameTicket {
        self.generation += 1;
        self.words = None;
        self.panels.clear();
        self.status = SequencerStatus::Loading;
        self.last_error = None;
        self.completion_signaled = false;
        debug!(generation = self.generation, "new game requested");

        GameTicket {
            generation: self.generation,
        }
    }

    /// Apply the generator's answer for `ticket`
    ///
    /// An answer for a superseded request is ignored.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Service` if the fetch failed and `GameError::Fetch`
    /// if the answer was not three valid words. Either way the sequencer stays
    /// in `Loading` and keeps the message in [`last_error`](Self::last_error).
    pub fn finish_loading(
        &mut self,
        ticket: GameTicket,
        fetched: Result<String, ServiceError>,
    ) -> Result<(), GameError> {
        if ticket.generation != self.generation || self.status != SequencerStatus::Loading {
            debug!(ticket = ticket.generation, current = self.generation, "discarding stale words");
            return Ok(());
        }

        match fetched
            .map_err(GameError::from)
            .and_then(|raw| parse_triple(&raw).map_err(GameError::from))
        {
            Ok(words) => {
                let first = Panel::new(words[0].clone(), &mut self.reveal);
                self.panels.push(first);
                self.words = Some(words);
                self.status = SequencerStatus::Ready(0);
                self.last_error = None;
                debug!(generation = self.generation, "game ready");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load puzzle words");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch a fresh triple and start a new game
    ///
    /// # Errors
    ///
    /// See [`finish_loading`](Self::finish_loading).
    pub async fn new_game(&mut self, source: &dyn WordSource) -> Result<(), GameError> {
        let ticket = self.begin_new_game();
        let fetched = source.fetch_triple().await;
        self.finish_loading(ticket, fetched)
    }

    /// Type into a slot of a visible round
    ///
    /// Returns `false` if the round is not visible or the panel refused.
    pub fn set_letter(&mut self, round: usize, slot: usize, input: &str) -> bool {
        self.panels
            .get_mut(round)
            .is_some_and(|panel| panel.set_letter(slot, input))
    }

    /// Clear the active panel's letters and feedback
    pub fn reset_active(&mut self) {
        if let SequencerStatus::Ready(round) = self.status {
            self.panels[round].reset();
        }
    }

    /// Start validating the active round's guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotReady` while loading, `GameError::RoundNotActive`
    /// for any round other than the active one, and `GameError::Refused` if the
    /// panel would not submit.
    pub fn submit(&mut self, round: usize) -> Result<SubmissionTicket, GameError> {
        match self.status {
            SequencerStatus::Loading => return Err(GameError::NotReady),
            SequencerStatus::Ready(active) if active == round => {}
            _ => return Err(GameError::RoundNotActive(round)),
        }

        let validation = self.panels[round].submit()?;
        Ok(SubmissionTicket {
            game: self.generation,
            round,
            validation,
        })
    }

    /// Apply the dictionary's answer and advance if the round was solved
    ///
    /// # Errors
    ///
    /// Returns `GameError::Service` if the lookup itself failed.
    pub fn resolve(
        &mut self,
        ticket: &SubmissionTicket,
        is_word: Result<bool, ServiceError>,
    ) -> Result<Progress, GameError> {
        if ticket.game != self.generation {
            debug!(ticket = ticket.game, current = self.generation, "discarding answer from old game");
            return Ok(Progress::Stale);
        }
        let Some(panel) = self.panels.get_mut(ticket.round) else {
            return Ok(Progress::Stale);
        };

        let progress = match panel.resolve(&ticket.validation, is_word)? {
            SubmitOutcome::Stale => Progress::Stale,
            SubmitOutcome::NotAWord => Progress::NotAWord {
                round: ticket.round,
            },
            SubmitOutcome::Retry(feedback) => Progress::Retry {
                round: ticket.round,
                feedback,
            },
            SubmitOutcome::Solved(_) => self.advance(ticket.round),
        };
        Ok(progress)
    }

    /// Submit the active round and wait for the dictionary
    ///
    /// # Errors
    ///
    /// See [`submit`](Self::submit) and [`resolve`](Self::resolve).
    pub async fn submit_with(
        &mut self,
        round: usize,
        dictionary: &dyn Dictionary,
    ) -> Result<Progress, GameError> {
        let ticket = self.submit(round)?;
        let is_word = dictionary.is_word(ticket.candidate()).await;
        self.resolve(&ticket, is_word)
    }

    fn advance(&mut self, solved: usize) -> Progress {
        if self.status != SequencerStatus::Ready(solved) {
            return Progress::Stale;
        }

        let next = solved + 1;
        match &self.words {
            Some(words) if next < ROUNDS => {
                let panel = Panel::new(words[next].clone(), &mut self.reveal);
                self.panels.push(panel);
                self.status = SequencerStatus::Ready(next);
                debug!(solved, next, "round advanced");
                Progress::Advanced { solved, next }
            }
            Some(_) => {
                self.status = SequencerStatus::Complete;
                if self.completion_signaled {
                    Progress::Stale
                } else {
                    self.completion_signaled = true;
                    info!("all rounds solved");
                    Progress::GameComplete
                }
            }
            None => Progress::Stale,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SequencerStatus {
        self.status
    }

    /// Panels of the rounds reached so far, in order
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[must_use]
    pub const fn active_round(&self) -> Option<usize> {
        match self.status {
            SequencerStatus::Ready(round) => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<&Panel> {
        self.active_round().and_then(|round| self.panels.get(round))
    }

    #[must_use]
    pub const fn words(&self) -> Option<&[PuzzleWord; ROUNDS]> {
        self.words.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SequencerStatus::Complete
    }

    /// Message from the last failed load, cleared by the next attempt
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::panel::{FixedReveal, PanelState, SubmitRefused};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Canned(&'static str);

    #[async_trait]
    impl WordSource for Canned {
        async fn fetch_triple(&self) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct Down;

    #[async_trait]
    impl WordSource for Down {
        async fn fetch_triple(&self) -> Result<String, ServiceError> {
            Err(ServiceError::Status(502))
        }
    }

    /// Accepts only the listed words and records every lookup
    struct Listed {
        words: &'static [&'static str],
        asked: Mutex<Vec<String>>,
    }

    impl Listed {
        fn new(words: &'static [&'static str]) -> Self {
            Self {
                words,
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Dictionary for Listed {
        async fn is_word(&self, candidate: &str) -> Result<bool, ServiceError> {
            self.asked.lock().unwrap().push(candidate.to_string());
            Ok(self.words.iter().any(|w| *w == candidate))
        }
    }

    fn ready(raw: &str) -> RoundSequencer<FixedReveal> {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        let ticket = seq.begin_new_game();
        seq.finish_loading(ticket, Ok(raw.to_string())).unwrap();
        seq
    }

    fn type_word(seq: &mut RoundSequencer<FixedReveal>, round: usize, text: &str) {
        for (slot, ch) in text.chars().enumerate() {
            seq.set_letter(round, slot, &ch.to_string());
        }
    }

    fn solve(seq: &mut RoundSequencer<FixedReveal>, round: usize) -> Progress {
        let word = seq.words().unwrap()[round].text().to_string();
        type_word(seq, round, &word);
        let ticket = seq.submit(round).unwrap();
        seq.resolve(&ticket, Ok(true)).unwrap()
    }

    #[test]
    fn starts_loading_without_panels() {
        let seq = RoundSequencer::with_reveal(FixedReveal(0));
        assert_eq!(seq.status(), SequencerStatus::Loading);
        assert!(seq.panels().is_empty());
        assert!(seq.words().is_none());
    }

    #[test]
    fn loading_builds_only_the_first_panel() {
        let seq = ready("brain,ghost,mucky");

        assert_eq!(seq.status(), SequencerStatus::Ready(0));
        assert_eq!(seq.panels().len(), 1);
        assert_eq!(seq.panels()[0].word().text(), "brain");
        assert_eq!(seq.active_round(), Some(0));
    }

    #[test]
    fn two_words_is_a_fetch_error() {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        let ticket = seq.begin_new_game();
        let err = seq
            .finish_loading(ticket, Ok("brain,ghost".to_string()))
            .unwrap_err();

        assert!(matches!(err, GameError::Fetch(_)));
        assert_eq!(seq.status(), SequencerStatus::Loading);
        assert!(seq.panels().is_empty());
        assert!(seq.last_error().unwrap().contains("three words"));
    }

    #[test]
    fn service_error_keeps_loading() {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        let ticket = seq.begin_new_game();
        let err = seq
            .finish_loading(ticket, Err(ServiceError::Status(500)))
            .unwrap_err();

        assert!(matches!(err, GameError::Service(ServiceError::Status(500))));
        assert_eq!(seq.status(), SequencerStatus::Loading);
        assert!(seq.last_error().is_some());
    }

    #[test]
    fn rounds_advance_in_order_and_complete_once() {
        let mut seq = ready("brain,ghost,mucky");

        assert_eq!(solve(&mut seq, 0), Progress::Advanced { solved: 0, next: 1 });
        assert_eq!(seq.panels().len(), 2);
        assert_eq!(seq.panels()[1].word().text(), "ghost");

        assert_eq!(solve(&mut seq, 1), Progress::Advanced { solved: 1, next: 2 });
        assert_eq!(seq.panels().len(), 3);

        assert_eq!(solve(&mut seq, 2), Progress::GameComplete);
        assert!(seq.is_complete());
        assert_eq!(seq.active_round(), None);
        assert!(seq.panels().iter().all(Panel::is_solved));

        // nothing is left to submit
        assert!(matches!(seq.submit(2), Err(GameError::RoundNotActive(2))));
    }

    #[test]
    fn only_the_active_round_accepts_submissions() {
        let mut seq = ready("brain,ghost,mucky");

        assert!(matches!(seq.submit(1), Err(GameError::RoundNotActive(1))));
        solve(&mut seq, 0);
        assert!(matches!(seq.submit(0), Err(GameError::RoundNotActive(0))));
    }

    #[test]
    fn wrong_guess_does_not_advance() {
        let mut seq = ready("GHOST,brain,mucky");
        type_word(&mut seq, 0, "GHOTS");
        let ticket = seq.submit(0).unwrap();

        let progress = seq.resolve(&ticket, Ok(true)).unwrap();

        assert_eq!(
            progress,
            Progress::Retry {
                round: 0,
                feedback: "GGGYY".parse().unwrap()
            }
        );
        assert_eq!(seq.status(), SequencerStatus::Ready(0));
        assert_eq!(seq.panels().len(), 1);
    }

    #[test]
    fn rejected_word_does_not_advance() {
        let mut seq = ready("brain,ghost,mucky");
        type_word(&mut seq, 0, "bxxxx");
        let ticket = seq.submit(0).unwrap();

        let progress = seq.resolve(&ticket, Ok(false)).unwrap();

        assert_eq!(progress, Progress::NotAWord { round: 0 });
        assert_eq!(seq.panels()[0].state(), PanelState::Retryable);
        assert!(seq.panels()[0].feedback().is_neutral());
    }

    #[test]
    fn new_game_discards_in_flight_validation() {
        let mut seq = ready("brain,ghost,mucky");
        type_word(&mut seq, 0, "brain");
        let ticket = seq.submit(0).unwrap();

        let game = seq.begin_new_game();
        seq.finish_loading(game, Ok("frock,quilt,beach".to_string()))
            .unwrap();

        assert_eq!(seq.resolve(&ticket, Ok(true)).unwrap(), Progress::Stale);
        assert_eq!(seq.status(), SequencerStatus::Ready(0));
        assert_eq!(seq.panels()[0].word().text(), "frock");
        assert_eq!(seq.panels()[0].state(), PanelState::AwaitingGuess);
    }

    #[test]
    fn late_words_from_old_request_are_ignored() {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        let old = seq.begin_new_game();
        let current = seq.begin_new_game();

        seq.finish_loading(old, Ok("brain,ghost,mucky".to_string()))
            .unwrap();
        assert_eq!(seq.status(), SequencerStatus::Loading);

        seq.finish_loading(current, Ok("frock,quilt,beach".to_string()))
            .unwrap();
        assert_eq!(seq.words().unwrap()[0].text(), "frock");
    }

    #[test]
    fn reset_active_clears_letters() {
        let mut seq = ready("brain,ghost,mucky");
        type_word(&mut seq, 0, "bra");
        seq.reset_active();

        assert_eq!(seq.panels()[0].buffer().get(1), None);
        assert_eq!(seq.panels()[0].buffer().get(0), Some('b'));
    }

    #[test]
    fn submitting_while_loading_is_not_ready() {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        assert!(matches!(seq.submit(0), Err(GameError::NotReady)));
    }

    #[test]
    fn refusal_is_forwarded() {
        let mut seq = ready("brain,ghost,mucky");
        assert!(matches!(
            seq.submit(0),
            Err(GameError::Refused(SubmitRefused::Incomplete))
        ));
    }

    #[tokio::test]
    async fn full_game_against_services() {
        let dictionary = Listed::new(&["brain", "ghost", "mucky", "bring"]);
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        seq.new_game(&Canned("brain,ghost,mucky\n")).await.unwrap();

        type_word(&mut seq, 0, "bring");
        let progress = seq.submit_with(0, &dictionary).await.unwrap();
        assert!(matches!(progress, Progress::Retry { round: 0, .. }));

        type_word(&mut seq, 0, "brain");
        assert_eq!(
            seq.submit_with(0, &dictionary).await.unwrap(),
            Progress::Advanced { solved: 0, next: 1 }
        );

        type_word(&mut seq, 1, "ghost");
        seq.submit_with(1, &dictionary).await.unwrap();
        type_word(&mut seq, 2, "mucky");
        assert_eq!(
            seq.submit_with(2, &dictionary).await.unwrap(),
            Progress::GameComplete
        );

        let asked = dictionary.asked.lock().unwrap().clone();
        assert_eq!(asked, ["bring", "brain", "ghost", "mucky"]);
    }

    #[tokio::test]
    async fn failed_fetch_can_be_retried() {
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));

        assert!(seq.new_game(&Down).await.is_err());
        assert_eq!(seq.status(), SequencerStatus::Loading);

        seq.new_game(&Canned("brain,ghost,mucky")).await.unwrap();
        assert_eq!(seq.status(), SequencerStatus::Ready(0));
        assert!(seq.last_error().is_none());
    }
}
