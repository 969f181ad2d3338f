use super::command::Command;
use super::io::Io;
use super::render;
use crate::game::Move;
use crate::game::Session;
use crate::strategy::Strategy;

/// The read-evaluate-print loop: one hero at the keyboard, one villain
/// behind the session.
///
/// Input is matched as a command first and as a move second; anything
/// else is bounced back with a parse complaint and costs nothing. The
/// loop ends on `:q` or when the input stream closes, and prints the
/// session statistics on the way out either way.
pub struct Runner<I: Io> {
    io: I,
    session: Session,
}

impl<I: Io> Runner<I> {
    pub fn new(io: I, villain: Box<dyn Strategy>) -> Self {
        Self {
            io,
            session: Session::new(villain),
        }
    }

    pub fn run(&mut self) {
        self.io.write(render::WELCOME);
        self.io.write(render::HELP);
        while let Some(input) = self.io.prompt(render::PROMPT) {
            match Command::try_from(input.as_str()) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => self.io.write(render::HELP),
                Ok(Command::Stats) => self.io.write(&self.session.tally().to_string()),
                Err(_) => self.play(&input),
            }
        }
        self.io.write(&self.session.tally().to_string());
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn play(&mut self, input: &str) {
        match Move::try_from(input) {
            Ok(hero) => {
                let round = self.session.play(hero);
                self.io.write(&render::round(&round));
            }
            Err(_) => self.io.write(&render::misread(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::game::Round;
    use crate::strategy::Always;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Feeds a canned line per prompt and logs every write.
    #[derive(Clone)]
    struct Script {
        feed: Rc<RefCell<VecDeque<String>>>,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Script {
        fn with(feed: &[&str]) -> Self {
            Self {
                feed: Rc::new(RefCell::new(feed.iter().map(|s| s.to_string()).collect())),
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl Io for Script {
        fn read(&mut self) -> Option<String> {
            self.feed.borrow_mut().pop_front()
        }
        fn write(&mut self, msg: &str) {
            self.seen.borrow_mut().push(msg.to_string());
        }
    }

    fn rock_round(hero: Move) -> String {
        render::round(&Round {
            hero,
            villain: Move::Rock,
            outcome: crate::game::evaluate(hero, Move::Rock),
        })
    }

    #[test]
    fn full_transcript_against_always_rock() {
        let script = Script::with(&["r", "P", "s", ":s", ":h", ":q"]);
        let mut runner = Runner::new(script.clone(), Box::new(Always(Move::Rock)));
        runner.run();
        let stats = "You: 1\nAI: 1\nDraw: 1";
        let expected = vec![
            render::WELCOME.to_string(),
            render::HELP.to_string(),
            render::PROMPT.to_string(),
            rock_round(Move::Rock),
            render::PROMPT.to_string(),
            rock_round(Move::Paper),
            render::PROMPT.to_string(),
            rock_round(Move::Scissors),
            render::PROMPT.to_string(),
            stats.to_string(),
            render::PROMPT.to_string(),
            render::HELP.to_string(),
            render::PROMPT.to_string(),
            stats.to_string(),
        ];
        assert_eq!(*script.seen.borrow(), expected);
    }

    #[test]
    fn gibberish_costs_nothing() {
        let script = Script::with(&["rock", " r", ":q"]);
        let mut runner = Runner::new(script.clone(), Box::new(Always(Move::Rock)));
        runner.run();
        assert!(runner.session().history().is_empty());
        let seen = script.seen.borrow();
        assert!(seen.contains(&render::misread("rock")));
        assert!(seen.contains(&render::misread(" r")));
    }

    #[test]
    fn closed_input_quits_with_statistics() {
        let script = Script::with(&["r"]);
        let mut runner = Runner::new(script.clone(), Box::new(Always(Move::Rock)));
        runner.run();
        let seen = script.seen.borrow();
        assert_eq!(seen.last().unwrap(), "You: 0\nAI: 0\nDraw: 1");
        assert_eq!(runner.session().tally().total(), 1);
    }
}
