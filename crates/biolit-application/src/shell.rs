//! Application shell state machine.
//!
//! Owns the global mutable UI state the original kept in component
//! state: current mode, query status, current result, and the input
//! seed carried by "continue to next mode" transitions. All transitions
//! are explicit methods; the only asynchronous one is `submit`.

use crate::store::ResearchStore;
use biolit_core::{AppMode, BiolitError, ResultRecord};
use biolit_interaction::{ModeRequest, ResearchGateway};

/// Lifecycle of the current mode interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The application shell.
pub struct AppShell {
    mode: AppMode,
    status: QueryStatus,
    current: Option<ResultRecord>,
    last_error: Option<String>,
    input_seed: Option<String>,
    store: ResearchStore,
    gateway: ResearchGateway,
}

impl AppShell {
    pub fn new(gateway: ResearchGateway, store: ResearchStore, mode: AppMode) -> Self {
        Self {
            mode,
            status: QueryStatus::Idle,
            current: None,
            last_error: None,
            input_seed: None,
            store,
            gateway,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn current_result(&self) -> Option<&ResultRecord> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn store(&self) -> &ResearchStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ResearchStore {
        &mut self.store
    }

    /// Takes the input seed left by a continue transition, if any.
    pub fn take_input_seed(&mut self) -> Option<String> {
        self.input_seed.take()
    }

    /// Switches mode, resetting result, error, status, and seed.
    pub fn switch_mode(&mut self, mode: AppMode) {
        self.mode = mode;
        self.current = None;
        self.last_error = None;
        self.status = QueryStatus::Idle;
        self.input_seed = None;
    }

    /// Submits a request in the current mode.
    ///
    /// Rejected while a call is pending; the submit control is disabled
    /// during a call, the only concurrency control in the system. On
    /// success the record is appended to history and becomes current.
    pub async fn submit(&mut self, request: ModeRequest) -> Result<ResultRecord, BiolitError> {
        if self.status == QueryStatus::Loading {
            return Err(BiolitError::config("A request is already in flight"));
        }

        self.status = QueryStatus::Loading;
        self.last_error = None;
        self.current = None;

        match self.gateway.generate(self.mode, &request).await {
            Ok(response) => {
                let record = ResultRecord::new(
                    self.mode,
                    request.input.clone(),
                    response.content,
                    response.grounding_sources,
                );
                self.store.append(record.clone());
                self.current = Some(record.clone());
                self.status = QueryStatus::Success;
                Ok(record)
            }
            Err(err) => {
                self.status = QueryStatus::Error;
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Follows the current mode's continue-target, seeding the next
    /// mode's input.
    ///
    /// The query builder carries the original query forward; every other
    /// source carries the generated content. Returns the new mode, or
    /// `None` when there is no current result or no target.
    pub fn continue_to_next(&mut self) -> Option<AppMode> {
        let current = self.current.as_ref()?;
        let target = current.mode.spec().continue_target?;
        let seed = if current.mode == AppMode::QueryBuilder {
            current.original_query.clone()
        } else {
            current.content.clone()
        };

        self.mode = target;
        self.input_seed = Some(seed);
        self.current = None;
        self.last_error = None;
        self.status = QueryStatus::Idle;
        Some(target)
    }

    /// Forces the in-flight state, standing in for a parked model call.
    #[cfg(test)]
    fn begin_loading(&mut self) {
        self.status = QueryStatus::Loading;
    }

    /// Re-opens an archived record: switches to its mode and shows it.
    pub fn select_record(&mut self, record: ResultRecord) {
        self.mode = record.mode;
        self.current = Some(record);
        self.last_error = None;
        self.status = QueryStatus::Success;
        self.input_seed = None;
    }
}
