//! Game flow: turns user triggers into deck transitions and view updates.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::{Deck, DeckEvent, Phase};
use crate::error::OptionsError;
use crate::options::DeckOptions;
use crate::result::Draw;

mod view;

pub use view::View;

/// A deck wired to the view that displays it.
///
/// Each public method handles one user trigger: it updates the deck and
/// then tells the view what happened.
#[derive(Debug)]
pub struct Game<V, R = ChaCha8Rng> {
    deck: Deck<R>,
    view: V,
    /// Last card drawn since the deck was last made ready.
    current: Option<Card>,
    /// Set once a draw found the deck empty.
    ended: bool,
}

impl<V: View> Game<V, ChaCha8Rng> {
    /// Creates a game with a seeded deck. Call [`Game::start`] before drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not validate.
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{DeckEvent, DeckOptions, Game};
    ///
    /// let mut game = Game::new(DeckOptions::default(), 7, Vec::<DeckEvent>::new()).unwrap();
    /// game.start();
    /// let card = game.draw().card().unwrap();
    /// assert_eq!(game.view(), &[DeckEvent::Ready, DeckEvent::Drawn(card)]);
    /// ```
    pub fn new(options: DeckOptions, seed: u64, view: V) -> Result<Self, OptionsError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed), view)
    }
}

impl<V: View, R: Rng> Game<V, R> {
    /// Creates a game whose deck draws randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not validate.
    pub fn with_rng(options: DeckOptions, rng: R, view: V) -> Result<Self, OptionsError> {
        Ok(Self {
            deck: Deck::with_rng(options, rng)?,
            view,
            current: None,
            ended: false,
        })
    }

    /// Builds and shuffles the deck for the first round.
    ///
    /// Leaves a deck that still has cards in place.
    pub fn start(&mut self) {
        self.deck.build();
        self.deck.shuffle();
        self.make_ready();
        info!(cards = self.deck.len(), "game started");
    }

    /// Draws the top card and shows it, or reports the end of the game.
    pub fn draw(&mut self) -> Draw {
        let draw = self.deck.draw();
        match draw {
            Draw::Card(card) => {
                self.current = Some(card);
                self.view.render(&DeckEvent::Drawn(card));
            }
            Draw::Empty => {
                if !self.ended {
                    info!("game ended");
                }
                self.ended = true;
                self.view.render(&DeckEvent::Ended);
            }
        }
        draw
    }

    /// Starts over with a full, shuffled deck.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.make_ready();
        info!(cards = self.deck.len(), "game reset");
    }

    fn make_ready(&mut self) {
        self.current = None;
        self.ended = false;
        self.view.render(&DeckEvent::Ready);
    }
}

impl<V, R> Game<V, R> {
    /// Returns whether a draw has found the deck empty since the last reset.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ended
    }

    /// Returns the phase of the underlying deck.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.deck.phase()
    }

    /// Returns the card currently on display.
    #[must_use]
    pub const fn current(&self) -> Option<Card> {
        self.current
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    /// Returns the view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
