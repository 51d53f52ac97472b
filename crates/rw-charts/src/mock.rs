//! Mock backend and container for testing.
//!
//! Provides [`MockBackend`] and [`MockContainer`] for exercising the chart
//! lifecycle without a real charting library or document.

use std::sync::{Arc, RwLock};

use crate::backend::{ChartBackend, ChartInstance, Container};
use crate::config::ResolvedChart;
use crate::error::BackendError;

/// A chart the mock backend was asked to build.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedChart {
    /// Id of the surface the chart was bound to.
    pub surface: String,
    /// Configuration as handed to the backend.
    pub chart: ResolvedChart,
    /// Whether the instance has been destroyed.
    pub destroyed: bool,
}

#[derive(Debug, Default)]
struct MockState {
    created: Vec<CreatedChart>,
}

/// Mock charting backend.
///
/// Clones share the same record of created charts, so a test can keep one
/// handle for inspection while the adapter owns another.
///
/// # Example
///
/// ```ignore
/// use rw_charts::ChartAdapter;
/// use rw_charts::mock::{MockBackend, MockContainer};
///
/// let backend = MockBackend::new();
/// let mut adapter = ChartAdapter::new(backend.clone());
/// adapter.render("chart-1", &config, &MockContainer::new(["chart-1"]));
/// assert_eq!(backend.live_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<RwLock<MockState>>,
    failure: Option<String>,
}

impl MockBackend {
    /// Create a backend that builds every chart it is given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend whose construction always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Every chart built so far, in creation order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn created(&self) -> Vec<CreatedChart> {
        self.state.read().unwrap().created.clone()
    }

    /// Charts built and not yet destroyed.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn live(&self) -> Vec<CreatedChart> {
        self.state
            .read()
            .unwrap()
            .created
            .iter()
            .filter(|c| !c.destroyed)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live().len()
    }

    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.created().iter().filter(|c| c.destroyed).count()
    }
}

impl ChartBackend for MockBackend {
    type Surface = String;
    type Instance = MockInstance;

    fn create(
        &self,
        surface: &String,
        chart: &ResolvedChart,
    ) -> Result<MockInstance, BackendError> {
        if let Some(message) = &self.failure {
            return Err(BackendError::new(message.clone()));
        }

        let mut state = self.state.write().unwrap();
        state.created.push(CreatedChart {
            surface: surface.clone(),
            chart: chart.clone(),
            destroyed: false,
        });
        Ok(MockInstance {
            index: state.created.len() - 1,
            state: Arc::clone(&self.state),
        })
    }
}

/// Instance handle issued by [`MockBackend`].
#[derive(Debug)]
pub struct MockInstance {
    index: usize,
    state: Arc<RwLock<MockState>>,
}

impl ChartInstance for MockInstance {
    fn destroy(self) {
        self.state.write().unwrap().created[self.index].destroyed = true;
    }
}

/// Mock document region holding a fixed set of canvas ids.
#[derive(Debug, Clone, Default)]
pub struct MockContainer {
    ids: Vec<String>,
}

impl MockContainer {
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Container for MockContainer {
    type Surface = String;

    fn find_surface(&self, id: &str) -> Option<String> {
        self.ids.iter().find(|s| *s == id).cloned()
    }

    fn surface_ids(&self) -> Vec<String> {
        self.ids.clone()
    }
}
