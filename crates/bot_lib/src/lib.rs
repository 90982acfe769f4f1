pub mod wasm_helpers;
pub mod world;

use std::io::Write;

use log::*;
use wasm_helpers::HostConsole;
use world::{Move, Position};

// Reexports for quality of life when using the wasm macro
pub use lazy_static;

pub trait Bot {
    fn spawn() -> Self;
    /// Every turn, the bot receives its position on the board and must come up
    /// with the move to perform next.
    fn decide(&mut self, position: Position) -> Move;
}

/// Owns a bot and remembers the last move it settled on, so the host can
/// `examine` it after the decision call has returned.
pub struct Controller<B, W = HostConsole> {
    bot: B,
    current_move: Option<Move>,
    diagnostics: W,
}

impl<B: Bot> Controller<B> {
    pub fn new(bot: B) -> Self {
        Self::with_diagnostics(bot, HostConsole)
    }
}

impl<B: Bot, W: Write> Controller<B, W> {
    /// Builds a controller that echoes diagnostics into `diagnostics` instead
    /// of the host console.
    pub fn with_diagnostics(bot: B, diagnostics: W) -> Self {
        Self { bot, current_move: None, diagnostics }
    }

    /// Every bot sets off going straight ahead.
    pub fn initialize(&mut self) {
        self.current_move = Some(Move::Forward);
        debug!("Controller initialized, heading {}", Move::Forward);
    }

    pub fn decide(&mut self, position: Position) -> Move {
        // The host reads stdout as a plain stream, so no trailing newline.
        if let Err(e) =
            write!(self.diagnostics, "{}", position).and_then(|_| self.diagnostics.flush())
        {
            warn!("Failed to write diagnostics for {:?}: {}", position, e);
        }
        let chosen = self.bot.decide(position);
        debug!("Decided {} at {:?}", chosen, position);
        self.current_move = Some(chosen);
        chosen
    }

    pub fn examine(&self) -> Option<Move> {
        self.current_move
    }

    pub fn diagnostics(&self) -> &W {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    /// Answers with whatever it was told to, and counts how often it was asked.
    struct Puppet {
        answer: Move,
        asked: usize,
    }

    impl Bot for Puppet {
        fn spawn() -> Self {
            Self { answer: Move::Starboard, asked: 0 }
        }

        fn decide(&mut self, _position: Position) -> Move {
            self.asked += 1;
            self.answer
        }
    }

    /// A sink that refuses every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn controller() -> Controller<Puppet, Vec<u8>> {
        let _ = env_logger::builder().is_test(true).try_init();
        Controller::with_diagnostics(Puppet::spawn(), Vec::new())
    }

    #[test]
    fn no_move_before_initialization() {
        let controller = controller();
        assert_eq!(controller.examine(), None);
        assert_eq!(controller.examine(), None);
    }

    #[test]
    fn initialization_heads_forward() {
        let mut controller = controller();
        controller.initialize();
        assert_eq!(controller.examine(), Some(Move::Forward));
        assert_eq!(controller.bot.asked, 0);
        assert!(controller.diagnostics().is_empty());
    }

    #[test]
    fn decisions_are_delegated_and_remembered() {
        let mut controller = controller();
        controller.initialize();
        assert_eq!(controller.decide(Position::new(3, -7)), Move::Starboard);
        assert_eq!(controller.examine(), Some(Move::Starboard));
        assert_eq!(controller.bot.asked, 1);

        controller.bot.answer = Move::Larboard;
        controller.decide(Position::new(0, 0));
        assert_eq!(controller.examine(), Some(Move::Larboard));
    }

    #[test]
    fn decisions_echo_the_position() {
        let mut controller = controller();
        controller.decide(Position::new(3, -7));
        assert_eq!(controller.diagnostics().as_slice(), b"x: 3, y: -7");
        controller.decide(Position::new(i32::MAX, i32::MIN));
        assert_eq!(
            String::from_utf8_lossy(controller.diagnostics()),
            "x: 3, y: -7x: 2147483647, y: -2147483648"
        );
    }

    #[test]
    fn reinitialization_heads_forward_again() {
        let mut controller = controller();
        controller.initialize();
        controller.decide(Position::new(1, 1));
        controller.initialize();
        assert_eq!(controller.examine(), Some(Move::Forward));
    }

    #[test]
    fn diagnostics_failures_do_not_stop_decisions() {
        let mut controller = Controller::with_diagnostics(Puppet::spawn(), Broken);
        assert_eq!(controller.decide(Position::new(5, 5)), Move::Starboard);
        assert_eq!(controller.examine(), Some(Move::Starboard));
    }
}
