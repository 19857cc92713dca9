use crate::error::{Error, Result};
use crate::state::NavigationState;
use florarec_client::{DEFAULT_RESULT_LIMIT, RecommendRequest, RecommendationGateway};
use florarec_engine::adapt_many;
use florarec_types::{Criteria, DisplayPlantRecord};
use std::sync::{Arc, Mutex};

/// Snapshot of everything the presentation layer needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub nav: NavigationState,
    pub busy: bool,
    pub error: Option<String>,
    /// Last submitted criteria; survives a failed submission so the form
    /// can be re-shown for retry without re-entry.
    pub criteria: Option<Criteria>,
}

struct Inner {
    nav: NavigationState,
    busy: bool,
    error: Option<String>,
    criteria: Option<Criteria>,
    /// Bumped on every submission and on `go_home`. A completion whose
    /// captured generation no longer matches is stale and must be dropped,
    /// so it cannot resurrect a discarded screen.
    generation: u64,
}

/// Single authority on the current screen, the in-flight flag, the last
/// error, and the criteria/results/selection payloads.
///
/// All state lives behind one mutex with short critical sections; the lock
/// is never held across the gateway await.
pub struct Orchestrator {
    gateway: Arc<dyn RecommendationGateway>,
    state: Mutex<Inner>,
}

impl Orchestrator {
    pub fn new(gateway: Arc<dyn RecommendationGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(Inner {
                nav: NavigationState::Landing,
                busy: false,
                error: None,
                criteria: None,
                generation: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> ViewState {
        let state = self.state.lock().unwrap();
        ViewState {
            nav: state.nav.clone(),
            busy: state.busy,
            error: state.error.clone(),
            criteria: state.criteria.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    pub fn criteria(&self) -> Option<Criteria> {
        self.state.lock().unwrap().criteria.clone()
    }

    pub fn screen_name(&self) -> &'static str {
        self.state.lock().unwrap().nav.screen_name()
    }

    /// Landing → Input.
    pub fn start(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        match state.nav {
            NavigationState::Landing => {
                state.error = None;
                state.nav = NavigationState::Input;
                Ok(())
            }
            _ => Err(Error::InvalidTransition {
                from: state.nav.screen_name(),
                trigger: "start",
            }),
        }
    }

    /// Input → Results on success, Input (with the error slot filled) on
    /// failure.
    ///
    /// Exactly one gateway exchange per accepted call. At most one
    /// submission may be outstanding per orchestrator: a second concurrent
    /// call is rejected with [`Error::SubmissionInFlight`] before reaching
    /// the gateway. A completion that arrives after `go_home` is silently
    /// dropped.
    pub async fn submit(&self, criteria: Criteria) -> Result<()> {
        debug_assert!(criteria.validate().is_ok(), "criteria out of range");

        let generation = {
            let mut state = self.state.lock().unwrap();
            if !state.nav.is_input() {
                return Err(Error::InvalidTransition {
                    from: state.nav.screen_name(),
                    trigger: "submit",
                });
            }
            if state.busy {
                return Err(Error::SubmissionInFlight);
            }
            state.busy = true;
            state.error = None;
            state.criteria = Some(criteria.clone());
            state.generation += 1;
            state.generation
        };

        let request = RecommendRequest::from_criteria(&criteria, Some(DEFAULT_RESULT_LIMIT));
        let outcome = self.gateway.recommend(&request).await;

        let mut state = self.state.lock().unwrap();
        if state.generation != generation {
            // The user navigated away while the exchange was outstanding;
            // this result belongs to a discarded screen.
            tracing::debug!(generation, "dropping stale submission result");
            return Ok(());
        }
        state.busy = false;
        match outcome {
            Ok(raw) => {
                let plants = adapt_many(&raw);
                tracing::debug!(count = plants.len(), "submission succeeded");
                state.nav = NavigationState::Results { criteria, plants };
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                state.error = Some(err.to_string());
            }
        }
        Ok(())
    }

    /// Results → Details. The record must be a member of the currently
    /// shown result list.
    pub fn select(&self, record: &DisplayPlantRecord) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let nav = std::mem::replace(&mut state.nav, NavigationState::Landing);
        match nav {
            NavigationState::Results { criteria, plants } => {
                if !plants.contains(record) {
                    state.nav = NavigationState::Results { criteria, plants };
                    return Err(Error::SelectionNotInResults);
                }
                state.nav = NavigationState::Details {
                    criteria,
                    plants,
                    selected: record.clone(),
                };
                Ok(())
            }
            other => {
                let from = other.screen_name();
                state.nav = other;
                Err(Error::InvalidTransition {
                    from,
                    trigger: "select",
                })
            }
        }
    }

    /// Results → Input, or Details → Results. The Details variant carries
    /// the fetched list, so going back restores it without another gateway
    /// call.
    pub fn back(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let nav = std::mem::replace(&mut state.nav, NavigationState::Landing);
        match nav {
            NavigationState::Results { .. } => {
                state.nav = NavigationState::Input;
                Ok(())
            }
            NavigationState::Details { criteria, plants, .. } => {
                state.nav = NavigationState::Results { criteria, plants };
                Ok(())
            }
            other => {
                let from = other.screen_name();
                state.nav = other;
                Err(Error::InvalidTransition {
                    from,
                    trigger: "back",
                })
            }
        }
    }

    /// Any screen → Landing. Discards criteria, results, selection, and
    /// error, and invalidates any outstanding submission.
    pub fn go_home(&self) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.busy = false;
        state.nav = NavigationState::Landing;
        state.criteria = None;
        state.error = None;
    }

    /// Any screen → Input, clearing the error slot.
    pub fn go_to_input(&self) {
        let mut state = self.state.lock().unwrap();
        state.error = None;
        state.nav = NavigationState::Input;
    }
}
