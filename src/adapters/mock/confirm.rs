//! Confirmer double with a fixed answer.

use std::sync::{Arc, Mutex};

use crate::traits::Confirmer;

/// Answers every prompt the same way and records the prompts it saw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmer {
    /// A confirmer that accepts everything.
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// A confirmer that declines everything.
    pub fn declining() -> Self {
        Self::answering(false)
    }

    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}
