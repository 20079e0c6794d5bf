use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clima_core::{ClimaError, ClimateSource, Co2Table, Loaded, TemperatureTable};

/// Defines how a [`DynamicSource`] answers a dataset request.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Serve the built-in fixture.
    Fixture,
    /// Return the given value.
    Return(T),
    /// Fail with the given error.
    Fail(ClimaError),
}

impl<T> Default for MockBehavior<T> {
    fn default() -> Self {
        Self::Fixture
    }
}

#[derive(Default)]
struct InternalState {
    temperature: MockBehavior<Loaded<TemperatureTable>>,
    co2: MockBehavior<Loaded<Co2Table>>,
    temperature_calls: usize,
    co2_calls: usize,
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controls a [`DynamicSource`] at runtime.
#[derive(Clone)]
pub struct SourceController {
    state: Arc<Mutex<InternalState>>,
}

impl SourceController {
    /// Set the behavior for the anomaly table.
    pub fn set_temperature_behavior(&self, behavior: MockBehavior<Loaded<TemperatureTable>>) {
        lock(&self.state).temperature = behavior;
    }

    /// Set the behavior for the CO₂ table.
    pub fn set_co2_behavior(&self, behavior: MockBehavior<Loaded<Co2Table>>) {
        lock(&self.state).co2 = behavior;
    }

    /// Number of anomaly-table requests served so far.
    #[must_use]
    pub fn temperature_calls(&self) -> usize {
        lock(&self.state).temperature_calls
    }

    /// Number of CO₂-table requests served so far.
    #[must_use]
    pub fn co2_calls(&self) -> usize {
        lock(&self.state).co2_calls
    }

    /// Reset both behaviors to the fixtures and zero the call counts.
    pub fn clear_all_behaviors(&self) {
        *lock(&self.state) = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicSource {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicSource {
    /// Create a new dynamic source and its controller.
    #[must_use]
    pub fn new_with_controller() -> (Arc<dyn ClimateSource>, SourceController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = SourceController {
            state: Arc::clone(&state),
        };
        (Arc::new(Self { state }) as Arc<dyn ClimateSource>, controller)
    }
}

impl ClimateSource for DynamicSource {
    fn name(&self) -> &'static str {
        "clima-mock-dynamic"
    }

    fn temperature(&self) -> Result<Loaded<TemperatureTable>, ClimaError> {
        // Snapshot the behavior so fixture construction runs without the lock
        let behavior = {
            let mut guard = lock(&self.state);
            guard.temperature_calls += 1;
            guard.temperature.clone()
        };
        match behavior {
            MockBehavior::Fixture => crate::temperature_fixture(),
            MockBehavior::Return(loaded) => Ok(loaded),
            MockBehavior::Fail(e) => Err(e),
        }
    }

    fn co2(&self) -> Result<Loaded<Co2Table>, ClimaError> {
        let behavior = {
            let mut guard = lock(&self.state);
            guard.co2_calls += 1;
            guard.co2.clone()
        };
        match behavior {
            MockBehavior::Fixture => crate::co2_fixture(),
            MockBehavior::Return(loaded) => Ok(loaded),
            MockBehavior::Fail(e) => Err(e),
        }
    }
}
