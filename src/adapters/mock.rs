//! Mock adapters for testing.
//!
//! Configurable test doubles for the three capability ports, allowing
//! session and fallback tests to run without a live API.
//!
//! Queued responses are consumed in order; when the queue is empty
//! the mock fails with `Unavailable`, so an unconfigured mock behaves
//! like a dead service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::case::{Case, Difficulty, Suspect};
use crate::domain::session::{Message, Verdict};
use crate::ports::{CaseGenerator, Interrogator, ServiceError, SolutionEvaluator};

fn exhausted() -> ServiceError {
    ServiceError::unavailable("mock: no responses queued")
}

/// Mock case generator.
#[derive(Clone, Default)]
pub struct MockCaseGenerator {
    responses: Arc<Mutex<VecDeque<Result<Case, ServiceError>>>>,
    calls: Arc<Mutex<Vec<Difficulty>>>,
}

impl MockCaseGenerator {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful case.
    pub fn with_case(self, case: Case) -> Self {
        self.responses.lock().unwrap().push_back(Ok(case));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ServiceError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the difficulties requested so far.
    pub fn calls(&self) -> Vec<Difficulty> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaseGenerator for MockCaseGenerator {
    async fn generate(&self, difficulty: Difficulty) -> Result<Case, ServiceError> {
        self.calls.lock().unwrap().push(difficulty);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }
}

/// Mock interrogator.
#[derive(Clone, Default)]
pub struct MockInterrogator {
    responses: Arc<Mutex<VecDeque<Result<String, ServiceError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockInterrogator {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ServiceError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Returns the number of interrogation calls.
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl Interrogator for MockInterrogator {
    async fn interrogate(
        &self,
        _case: &Case,
        _suspect: &Suspect,
        _history: &[Message],
        query: &str,
    ) -> Result<String, ServiceError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }
}

/// Mock evaluator.
#[derive(Clone, Default)]
pub struct MockEvaluator {
    responses: Arc<Mutex<VecDeque<Result<Verdict, ServiceError>>>>,
    statements: Arc<Mutex<Vec<String>>>,
}

impl MockEvaluator {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful verdict.
    pub fn with_verdict(self, verdict: Verdict) -> Self {
        self.responses.lock().unwrap().push_back(Ok(verdict));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ServiceError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the statements received so far.
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl SolutionEvaluator for MockEvaluator {
    async fn evaluate(&self, _case: &Case, statement: &str) -> Result<Verdict, ServiceError> {
        self.statements.lock().unwrap().push(statement.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }
}
