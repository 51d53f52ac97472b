//! Chart lifecycle: creation, replacement and teardown.
//!
//! [`ChartAdapter`] owns the charting backend and the registry of live
//! instances keyed by element id. Each id maps to at most one live instance:
//! rendering again under the same id destroys the previous instance first.

use std::collections::HashMap;

use crate::backend::{ChartBackend, ChartInstance, Container};
use crate::config::ChartConfig;
use crate::error::{BackendError, ChartError};
use crate::id::{DEFAULT_ID_PREFIX, generate_chart_id, is_chart_id};

/// Renders charts through a backend and tracks the resulting instances.
///
/// # Example
///
/// ```ignore
/// use rw_charts::{ChartAdapter, ChartConfig, ChartKind};
///
/// let mut adapter = ChartAdapter::new(backend);
/// let id = adapter.generate_id();
/// adapter.render(&id, &ChartConfig::new(ChartKind::Bar, datasets), &container);
///
/// // Before replacing the container's content:
/// adapter.cleanup(&container);
/// ```
pub struct ChartAdapter<B: ChartBackend> {
    backend: B,
    /// Prefix of ids this adapter generates and cleans up.
    id_prefix: String,
    /// Live instances keyed by canvas element id.
    instances: HashMap<String, B::Instance>,
}

impl<B: ChartBackend> ChartAdapter<B> {
    /// Create an adapter with an empty registry.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            instances: HashMap::new(),
        }
    }

    /// Set the id prefix used by [`generate_id`](Self::generate_id) and
    /// [`cleanup`](Self::cleanup). Default is `chart`.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate a fresh canvas id with this adapter's prefix.
    #[must_use]
    pub fn generate_id(&self) -> String {
        generate_chart_id(&self.id_prefix)
    }

    /// Build a chart on `surface` without registering it.
    ///
    /// Options are the kind defaults merged with the configuration's own options.
    /// A backend failure is logged and yields `None`.
    pub fn create_instance(
        &self,
        surface: &B::Surface,
        config: &ChartConfig,
    ) -> Option<B::Instance> {
        self.build(surface, config)
            .inspect_err(|e| tracing::error!(error = %e, "Error creating chart"))
            .ok()
    }

    /// Render `config` onto the surface `id` inside `container`.
    ///
    /// Any instance already registered under `id` is destroyed first. A missing
    /// surface or a backend failure is logged and leaves nothing registered
    /// under `id`.
    pub fn render<C>(&mut self, id: &str, config: &ChartConfig, container: &C)
    where
        C: Container<Surface = B::Surface>,
    {
        match self.try_render(id, config, container) {
            Ok(()) => tracing::debug!(chart_id = %id, kind = %config.kind(), "Rendered chart"),
            Err(ChartError::SurfaceNotFound(_)) => {
                tracing::warn!(chart_id = %id, "Canvas element not found");
            }
            Err(ChartError::Backend { source, .. }) => {
                tracing::error!(chart_id = %id, error = %source, "Error rendering chart");
            }
        }
    }

    /// Fallible form of [`render`](Self::render).
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::SurfaceNotFound`] when `container` has no surface
    /// `id` (the registry is left untouched), or [`ChartError::Backend`] when
    /// construction fails (the previous instance is already destroyed).
    pub fn try_render<C>(
        &mut self,
        id: &str,
        config: &ChartConfig,
        container: &C,
    ) -> Result<(), ChartError>
    where
        C: Container<Surface = B::Surface>,
    {
        let surface = container
            .find_surface(id)
            .ok_or_else(|| ChartError::SurfaceNotFound(id.to_owned()))?;

        if let Some(previous) = self.instances.remove(id) {
            previous.destroy();
        }

        let instance = self
            .build(&surface, config)
            .map_err(|source| ChartError::Backend {
                id: id.to_owned(),
                source,
            })?;
        self.instances.insert(id.to_owned(), instance);
        Ok(())
    }

    /// Destroy every registered chart whose surface is in `container`.
    ///
    /// Only surfaces named with this adapter's id prefix are considered.
    /// Surfaces with no registered instance are skipped. Returns the number
    /// of instances destroyed.
    pub fn cleanup<C: Container>(&mut self, container: &C) -> usize {
        let mut destroyed = 0;
        for id in container.surface_ids() {
            if !is_chart_id(&id, &self.id_prefix) {
                continue;
            }
            if let Some(instance) = self.instances.remove(&id) {
                instance.destroy();
                destroyed += 1;
            }
        }
        tracing::debug!(destroyed, remaining = self.instances.len(), "Cleaned up charts");
        destroyed
    }

    /// Destroy every registered chart regardless of container.
    ///
    /// Returns the number of instances destroyed.
    pub fn destroy_all(&mut self) -> usize {
        let count = self.instances.len();
        for (_, instance) in self.instances.drain() {
            instance.destroy();
        }
        tracing::debug!(destroyed = count, "Destroyed all charts");
        count
    }

    /// Number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Whether an instance is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.instances.contains_key(id)
    }

    fn build(
        &self,
        surface: &B::Surface,
        config: &ChartConfig,
    ) -> Result<B::Instance, BackendError> {
        let resolved = config.resolve();
        self.backend.create(surface, &resolved)
    }
}

impl<B: ChartBackend> Drop for ChartAdapter<B> {
    fn drop(&mut self) {
        for (_, instance) in self.instances.drain() {
            instance.destroy();
        }
    }
}
