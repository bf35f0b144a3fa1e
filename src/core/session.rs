use rand::{
    seq::SliceRandom,
    Rng,
};

use crate::core::CatCard;

/// Cards dealt per round, unless settings say otherwise.
pub const DEFAULT_ROUND_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Pool fetch outstanding. No gesture input is accepted.
    Loading,
    /// A round is in progress and a current card is exposed.
    Active,
    /// The round is exhausted; summary data is available.
    Summary,
    /// Terminal: the fetch failed or yielded nothing. Only a restart of the
    /// process leaves this state.
    Empty,
}

/// Single-writer owner of the candidate pool, the dealt round, the position
/// pointer and the liked list. All mutation goes through the methods below.
pub struct SessionController {
    pool: Vec<CatCard>,
    cards: Vec<CatCard>,
    position: usize,
    liked: Vec<CatCard>,
    round_size: usize,
    phase: SessionPhase,
    last_error: Option<String>,
}

impl SessionController {
    pub fn new() -> Self {
        SessionController {
            pool: Vec::new(),
            cards: Vec::new(),
            position: 0,
            liked: Vec::new(),
            round_size: DEFAULT_ROUND_SIZE,
            phase: SessionPhase::Loading,
            last_error: None,
        }
    }

    /// Loading -> Active (or Empty when the pool has nothing to deal).
    pub fn pool_loaded<R: Rng>(&mut self, pool: Vec<CatCard>, round_size: usize, rng: &mut R) {
        if pool.is_empty() || round_size == 0 {
            self.phase = SessionPhase::Empty;
            self.last_error = Some("The cat source returned no cats.".to_string());
            return;
        }

        self.pool = pool;
        self.round_size = round_size;
        self.deal(rng);
    }

    /// Loading -> Empty. The message is surfaced by the empty screen.
    pub fn pool_failed(&mut self, message: String) {
        self.phase = SessionPhase::Empty;
        self.last_error = Some(message);
    }

    /// Records an accept/reject for the current card and advances. A call at
    /// the terminal position is a no-op, not an error.
    pub fn record_decision(&mut self, accept: bool) {
        if self.phase != SessionPhase::Active {
            return;
        }

        if accept {
            self.liked.push(self.cards[self.position].clone());
        }

        self.position += 1;
        if self.position == self.cards.len() {
            self.phase = SessionPhase::Summary;
        }
    }

    /// Summary -> Active with a fresh deal from the retained pool. Prior
    /// round results are discarded. The only way back into a round.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        if self.phase != SessionPhase::Summary || self.pool.is_empty() {
            return;
        }
        self.deal(rng);
    }

    /// Shuffle-and-slice sample: distinct cards, drawn uniformly without
    /// replacement from the pool.
    fn deal<R: Rng>(&mut self, rng: &mut R) {
        let mut indices: Vec<usize> = (0..self.pool.len()).collect();
        indices.shuffle(rng);
        indices.truncate(self.round_size.min(self.pool.len()));

        self.cards = indices.into_iter().map(|i| self.pool[i].clone()).collect();
        self.position = 0;
        self.liked.clear();
        self.phase = SessionPhase::Active;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&CatCard> {
        if self.phase == SessionPhase::Active {
            self.cards.get(self.position)
        } else {
            None
        }
    }

    /// The card behind the current one, if any. Drawn dimmed behind the
    /// active card so the deck reads as a stack.
    pub fn peek_next(&self) -> Option<&CatCard> {
        if self.phase == SessionPhase::Active {
            self.cards.get(self.position + 1)
        } else {
            None
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn round_len(&self) -> usize {
        self.cards.len()
    }

    pub fn liked(&self) -> &[CatCard] {
        &self.liked
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn card(id: &str) -> CatCard {
        CatCard {
            id: id.to_string(),
            image_url: format!("https://cataas.com/cat/{id}"),
            tags: vec!["test".to_string()],
        }
    }

    fn pool(n: usize) -> Vec<CatCard> {
        (0..n).map(|i| card(&format!("cat-{i}"))).collect()
    }

    #[test]
    fn starts_in_loading() {
        let session = SessionController::new();
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(session.current().is_none());
    }

    #[test]
    fn deal_samples_distinct_cards_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = SessionController::new();
        session.pool_loaded(pool(100), 20, &mut rng);

        assert_eq!(session.phase(), SessionPhase::Active);
        assert_eq!(session.round_len(), 20);

        let ids: HashSet<String> =
            (0..20).map(|i| session.cards[i].id.clone()).collect();
        assert_eq!(ids.len(), 20);
        for id in &ids {
            assert!(id.starts_with("cat-"));
        }
    }

    #[test]
    fn round_is_capped_at_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = SessionController::new();
        session.pool_loaded(pool(5), 20, &mut rng);

        assert_eq!(session.round_len(), 5);
    }

    #[test]
    fn empty_pool_goes_terminal() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = SessionController::new();
        session.pool_loaded(Vec::new(), 20, &mut rng);

        assert_eq!(session.phase(), SessionPhase::Empty);
        assert!(session.last_error().is_some());
    }

    #[test]
    fn fetch_failure_goes_terminal_with_message() {
        let mut session = SessionController::new();
        session.pool_failed("connection refused".to_string());

        assert_eq!(session.phase(), SessionPhase::Empty);
        assert_eq!(session.last_error(), Some("connection refused"));
    }

    #[test]
    fn decisions_advance_and_invariants_hold() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = SessionController::new();
        session.pool_loaded(pool(10), 4, &mut rng);

        for accept in [true, false, true, false] {
            assert!(session.position() <= session.round_len());
            assert!(session.liked().len() <= session.position());
            session.record_decision(accept);
        }

        assert_eq!(session.phase(), SessionPhase::Summary);
        assert_eq!(session.position(), 4);
        assert_eq!(session.liked().len(), 2);
    }

    #[test]
    fn terminal_decision_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = SessionController::new();
        session.pool_loaded(pool(3), 3, &mut rng);

        for _ in 0..3 {
            session.record_decision(true);
        }
        assert_eq!(session.phase(), SessionPhase::Summary);

        session.record_decision(true);
        session.record_decision(false);
        assert_eq!(session.position(), 3);
        assert_eq!(session.liked().len(), 3);
        assert_eq!(session.phase(), SessionPhase::Summary);
    }

    #[test]
    fn reset_deals_a_fresh_round() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = SessionController::new();
        session.pool_loaded(pool(50), 10, &mut rng);

        for _ in 0..10 {
            session.record_decision(true);
        }
        assert_eq!(session.phase(), SessionPhase::Summary);

        session.reset(&mut rng);
        assert_eq!(session.phase(), SessionPhase::Active);
        assert_eq!(session.position(), 0);
        assert!(session.liked().is_empty());
        assert_eq!(session.round_len(), 10);
    }

    #[test]
    fn reset_mid_round_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = SessionController::new();
        session.pool_loaded(pool(10), 5, &mut rng);

        session.record_decision(true);
        session.reset(&mut rng);

        assert_eq!(session.phase(), SessionPhase::Active);
        assert_eq!(session.position(), 1);
        assert_eq!(session.liked().len(), 1);
    }

    #[test]
    fn peek_next_tracks_the_card_behind_the_current_one() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = SessionController::new();
        session.pool_loaded(pool(3), 3, &mut rng);

        let second = session.cards[1].id.clone();
        assert_eq!(session.peek_next().map(|c| c.id.as_str()), Some(second.as_str()));

        session.record_decision(false);
        session.record_decision(false);
        // Last card: nothing behind it.
        assert!(session.peek_next().is_none());

        session.record_decision(true);
        assert_eq!(session.phase(), SessionPhase::Summary);
        assert!(session.peek_next().is_none());
    }

    #[test]
    fn full_round_of_five_matches_expected_summary_inputs() {
        // Pool of 5, round of 5: accept positions 0, 2, 4 and reject 1, 3.
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = SessionController::new();
        session.pool_loaded(pool(5), 5, &mut rng);

        for i in 0..5 {
            session.record_decision(i % 2 == 0);
        }

        assert_eq!(session.phase(), SessionPhase::Summary);
        assert_eq!(session.position(), 5);
        assert_eq!(session.liked().len(), 3);
    }
}
