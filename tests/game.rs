//! Game integration tests.

use exploding_cards::{
    Card, CardKind, CardType, DeckEvent, DeckOptions, Draw, Game, Phase, View,
};

fn two_card_options() -> DeckOptions {
    DeckOptions::empty()
        .with_card_type(CardType::new(CardKind::Bomb, 1))
        .with_card_type(CardType::new(CardKind::Defuse, 1))
}

#[derive(Default)]
struct Screen {
    shown: Option<Card>,
    draw_enabled: bool,
    end_message: bool,
}

impl View for Screen {
    fn render(&mut self, event: &DeckEvent) {
        match event {
            DeckEvent::Drawn(card) => self.shown = Some(*card),
            DeckEvent::Ended => {
                self.draw_enabled = false;
                self.end_message = true;
            }
            DeckEvent::Ready => {
                self.shown = None;
                self.draw_enabled = true;
                self.end_message = false;
            }
        }
    }
}

#[test]
fn start_emits_ready() {
    let mut game = Game::new(DeckOptions::default(), 1, Vec::<DeckEvent>::new()).unwrap();
    assert_eq!(game.phase(), Phase::Empty);

    game.start();
    assert_eq!(game.view(), &[DeckEvent::Ready]);
    assert_eq!(game.phase(), Phase::Ready);
    assert_eq!(game.deck().len(), 39);
    assert_eq!(game.current(), None);
}

#[test]
fn full_round_event_sequence() {
    let mut game = Game::new(two_card_options(), 3, Vec::<DeckEvent>::new()).unwrap();
    game.start();

    let first = game.draw().card().unwrap();
    let second = game.draw().card().unwrap();
    assert_ne!(first.kind, second.kind);
    assert_eq!(game.current(), Some(second));
    assert!(!game.is_over());

    assert_eq!(game.draw(), Draw::Empty);
    assert!(game.is_over());

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.current(), None);
    assert_eq!(game.deck().len(), 2);

    assert_eq!(
        game.view(),
        &[
            DeckEvent::Ready,
            DeckEvent::Drawn(first),
            DeckEvent::Drawn(second),
            DeckEvent::Ended,
            DeckEvent::Ready,
        ]
    );
}

#[test]
fn repeated_draws_after_end_keep_reporting_end() {
    let mut game = Game::new(two_card_options(), 5, Vec::<DeckEvent>::new()).unwrap();
    game.start();
    game.draw();
    game.draw();

    game.view_mut().clear();
    assert_eq!(game.draw(), Draw::Empty);
    assert_eq!(game.draw(), Draw::Empty);
    assert_eq!(game.view(), &[DeckEvent::Ended, DeckEvent::Ended]);
    assert_eq!(game.deck().len(), 0);
}

#[test]
fn draw_before_start_ends_game() {
    let mut game = Game::new(DeckOptions::default(), 5, Vec::<DeckEvent>::new()).unwrap();
    assert_eq!(game.draw(), Draw::Empty);
    assert!(game.is_over());
    assert_eq!(game.view(), &[DeckEvent::Ended]);
}

#[test]
fn reset_mid_game_discards_remaining() {
    let mut game = Game::new(DeckOptions::default(), 9, Vec::<DeckEvent>::new()).unwrap();
    game.start();
    for _ in 0..10 {
        game.draw();
    }
    assert_eq!(game.deck().len(), 29);

    game.reset();
    assert_eq!(game.deck().len(), 39);
    assert_eq!(game.view().last(), Some(&DeckEvent::Ready));
}

#[test]
fn screen_follows_affordances() {
    let mut game = Game::new(two_card_options(), 11, Screen::default()).unwrap();
    game.start();
    assert!(game.view().draw_enabled);

    let card = game.draw().card().unwrap();
    assert_eq!(game.view().shown, Some(card));

    game.draw();
    game.draw();
    assert!(!game.view().draw_enabled);
    assert!(game.view().end_message);

    game.reset();
    assert!(game.view().draw_enabled);
    assert!(!game.view().end_message);
    assert_eq!(game.view().shown, None);
}

#[test]
fn borrowed_view_receives_events() {
    let mut events: Vec<DeckEvent> = Vec::new();
    {
        let mut game = Game::new(two_card_options(), 2, &mut events).unwrap();
        game.start();
        game.draw();
    }
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], DeckEvent::Ready);
}

#[test]
fn empty_table_game_is_immediately_over() {
    let mut game = Game::new(DeckOptions::empty(), 1, Vec::<DeckEvent>::new()).unwrap();
    game.reset();
    assert_eq!(game.phase(), Phase::Empty);
    assert_eq!(game.draw(), Draw::Empty);
    assert!(game.is_over());
}
