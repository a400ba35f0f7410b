use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use runlines::exec::CommandRunner;
use runlines::script::CommandLine;
use runlines::types::CommandOutcome;

type Hook = Box<dyn FnMut(usize) + Send>;

/// A fake runner that:
/// - records the full text of every command it is asked to run
/// - answers with a configured outcome per program name
///   (`false` fails with exit code 1 unless overridden; everything else
///   succeeds)
/// - optionally calls a hook with the number of dispatches so far, after
///   each one
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<String>>>,
    outcomes: HashMap<String, CommandOutcome>,
    after_each: Option<Hook>,
}

impl FakeRunner {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            outcomes: HashMap::new(),
            after_each: None,
        }
    }

    pub fn with_outcome(mut self, program: &str, outcome: CommandOutcome) -> Self {
        self.outcomes.insert(program.to_string(), outcome);
        self
    }

    pub fn after_each(mut self, hook: impl FnMut(usize) + Send + 'static) -> Self {
        self.after_each = Some(Box::new(hook));
        self
    }

    fn outcome_for(&self, program: &str) -> CommandOutcome {
        match self.outcomes.get(program) {
            Some(outcome) => outcome.clone(),
            None if program == "false" => CommandOutcome::Exited(1),
            None => CommandOutcome::Success,
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>> {
        let outcome = self.outcome_for(cmd.program());
        let count = {
            let mut guard = self.executed.lock().unwrap();
            guard.push(cmd.text().to_string());
            guard.len()
        };
        if let Some(hook) = self.after_each.as_mut() {
            hook(count);
        }

        Box::pin(async move { outcome })
    }
}
