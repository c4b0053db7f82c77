//! CLI Exploding Cards example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use exploding_cards::{Card, CardKind, DeckEvent, DeckOptions, Draw, Game, View};
use tracing_subscriber::EnvFilter;

struct Terminal;

impl View for Terminal {
    fn render(&mut self, event: &DeckEvent) {
        match event {
            DeckEvent::Drawn(card) => println!("You drew: {}", describe(*card)),
            DeckEvent::Ended => {
                println!("No cards left. The game is over.");
                println!("Type 'r' to reset the deck.");
            }
            DeckEvent::Ready => println!("Deck shuffled and ready."),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Exploding Cards CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = match Game::new(DeckOptions::default(), seed, Terminal) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid deck options: {err}");
            return;
        }
    };
    game.start();

    loop {
        let prompt = if game.is_over() {
            "[r]eset, [q]uit: "
        } else {
            "[d]raw, [r]eset, [q]uit: "
        };

        match prompt_line(prompt).as_str() {
            "d" | "draw" if !game.is_over() => {
                if let Draw::Card(_) = game.draw() {
                    println!("{} card(s) left.", game.deck().len());
                }
            }
            "r" | "reset" => game.reset(),
            "q" | "quit" => break,
            _ => println!("Unknown action."),
        }
    }
}

fn describe(card: Card) -> String {
    match card.kind {
        CardKind::Bomb => "a Bomb! Hope you kept a Defuse.".to_string(),
        _ => card.to_string(),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
