use bot_lib::{
    world::{Move, Position},
    Bot,
};
use bot_macro::wasm_bot;

/// Always turns to larboard, wherever it happens to be. The position is
/// echoed back to the host by the controller but never looked at here.
#[wasm_bot]
struct Larboard;

impl Bot for Larboard {
    fn spawn() -> Self {
        Self
    }

    fn decide(&mut self, _position: Position) -> Move {
        Move::Larboard
    }
}
