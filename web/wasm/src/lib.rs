use exploding_cards::{Card, DeckEvent, DeckOptions, Game, Phase, View};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Page state driven by deck events.
#[derive(Default)]
struct Screen {
    current: Option<Card>,
    ended: bool,
}

impl View for Screen {
    fn render(&mut self, event: &DeckEvent) {
        match event {
            DeckEvent::Drawn(card) => self.current = Some(*card),
            DeckEvent::Ended => self.ended = true,
            DeckEvent::Ready => {
                self.current = None;
                self.ended = false;
            }
        }
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<Screen>,
    visible: bool,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game =
            Game::new(DeckOptions::default(), seed as u64, Screen::default()).map_err(js_err)?;

        Ok(Self {
            game,
            visible: true,
        })
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        match self.game.draw().card() {
            Some(card) => to_js_value(&JsCard::from(card)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let screen = self.game.view();
        let snapshot = Snapshot {
            phase: phase_to_str(self.game.phase()),
            cards_remaining: self.game.deck().len() as u32,
            current: screen.current.map(JsCard::from),
            ended: screen.ended,
            can_draw: !screen.ended,
            can_reset: screen.ended,
            visible: self.visible,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    cards_remaining: u32,
    current: Option<JsCard>,
    ended: bool,
    can_draw: bool,
    can_reset: bool,
    visible: bool,
}

#[derive(Serialize)]
struct JsCard {
    kind: &'static str,
    value: Option<u8>,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            kind: card.kind.name(),
            value: card.value,
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Ready => "Ready",
        Phase::Empty => "Empty",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
