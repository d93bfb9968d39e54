/// UI Binder
/// Wires the trigger control's click to one greet round trip

use std::cell::{Cell, RefCell};

use futures::future::{AbortHandle, Abortable};

use crate::commands;
use crate::error::BinderError;
use crate::models::{BinderConfig, BinderState, BindingRole, TriggerOutcome, TriggerPolicy};
use crate::services::{CommandHost, Document, TextSink, TextSource};

/// Call still running under `CancelOnRetrigger`
struct InFlight {
    generation: u64,
    abort: AbortHandle,
}

/// Binder over one input, one output and a command host
///
/// Single-threaded: wrap it in an `Rc` to share it with event listeners.
pub struct UiBinder<H, D: Document> {
    host: H,
    input: D::Input,
    output: D::Output,
    config: BinderConfig,
    generation: Cell<u64>,
    pending: Cell<usize>,
    in_flight: RefCell<Option<InFlight>>,
}

impl<H, D> UiBinder<H, D>
where
    H: CommandHost,
    D: Document,
{
    /// Look up the bound elements and build the binder
    ///
    /// Elements are resolved in the order input, output, trigger; the first one
    /// missing fails the whole bind. The trigger handle is returned so the caller
    /// can attach its click listener.
    pub fn bind(
        document: &D,
        host: H,
        config: BinderConfig,
    ) -> Result<(Self, D::Trigger), BinderError> {
        let input = document
            .input(&config.input_id)
            .ok_or_else(|| missing(BindingRole::Input, &config.input_id))?;
        let output = document
            .output(&config.output_id)
            .ok_or_else(|| missing(BindingRole::Output, &config.output_id))?;
        let trigger = document
            .trigger(&config.trigger_id)
            .ok_or_else(|| missing(BindingRole::Trigger, &config.trigger_id))?;

        log::info!(
            "[Binder] Bound #{} -> {} -> #{} via #{}",
            config.input_id,
            config.command,
            config.output_id,
            config.trigger_id
        );

        let binder = Self {
            host,
            input,
            output,
            config,
            generation: Cell::new(0),
            pending: Cell::new(0),
            in_flight: RefCell::new(None),
        };
        Ok((binder, trigger))
    }

    /// Handle one click: read the input, call the command, show the result
    pub async fn trigger(&self) -> Result<TriggerOutcome, BinderError> {
        let name = self.input.value();
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        log::debug!("[Binder] Trigger #{} -> {}", generation, self.config.command);

        let result = {
            let _pending = Pending::enter(&self.pending);
            self.call(generation, &name).await
        };

        match result {
            Ok(Some(text)) => {
                self.output.set_text(&text);
                Ok(TriggerOutcome::Displayed(text))
            }
            Ok(None) => {
                log::debug!("[Binder] Trigger #{} superseded", generation);
                Ok(TriggerOutcome::Superseded)
            }
            Err(e) => {
                if self.config.show_errors {
                    self.output.set_text(&format!("Error: {}", e));
                }
                Err(e)
            }
        }
    }

    /// `None` when a later trigger aborted this call
    async fn call(&self, generation: u64, name: &str) -> Result<Option<String>, BinderError> {
        let request = commands::greet(&self.host, &self.config.command, name);

        match self.config.policy {
            TriggerPolicy::LastResolvedWins => request.await.map(Some),
            TriggerPolicy::CancelOnRetrigger => {
                let (abort, registration) = AbortHandle::new_pair();
                let previous = self
                    .in_flight
                    .borrow_mut()
                    .replace(InFlight { generation, abort });
                if let Some(previous) = previous {
                    previous.abort.abort();
                }

                let result = Abortable::new(request, registration).await;

                let mut in_flight = self.in_flight.borrow_mut();
                if in_flight.as_ref().map(|f| f.generation) == Some(generation) {
                    *in_flight = None;
                }
                drop(in_flight);

                match result {
                    Ok(response) => response.map(Some),
                    Err(_aborted) => Ok(None),
                }
            }
        }
    }

    /// Whether any call is still outstanding
    pub fn state(&self) -> BinderState {
        if self.pending.get() == 0 {
            BinderState::Idle
        } else {
            BinderState::AwaitingResponse
        }
    }

    /// Number of outstanding calls
    pub fn in_flight(&self) -> usize {
        self.pending.get()
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }
}

/// Counts a call as outstanding until dropped, including when the trigger
/// future itself is dropped mid-call
struct Pending<'a>(&'a Cell<usize>);

impl<'a> Pending<'a> {
    fn enter(count: &'a Cell<usize>) -> Self {
        count.set(count.get() + 1);
        Self(count)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

fn missing(role: BindingRole, id: &str) -> BinderError {
    BinderError::MissingBindingTarget {
        role,
        id: id.to_string(),
    }
}
