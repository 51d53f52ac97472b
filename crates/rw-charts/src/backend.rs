//! Seams to the charting library and the host document.
//!
//! The adapter never draws anything itself. A [`ChartBackend`] turns a resolved
//! configuration into a live instance bound to a drawing surface, and a
//! [`Container`] answers which surfaces exist in a region of the document.

use crate::config::ResolvedChart;
use crate::error::BackendError;

/// A live chart owned by the adapter's registry.
pub trait ChartInstance {
    /// Release the instance and its drawing resources.
    fn destroy(self);
}

/// The external charting library.
pub trait ChartBackend {
    /// Drawing surface a chart is bound to (e.g., a canvas handle).
    type Surface;
    /// Instance handle returned by the library.
    type Instance: ChartInstance;

    /// Build a chart on `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the library rejects the configuration or the
    /// surface.
    fn create(
        &self,
        surface: &Self::Surface,
        chart: &ResolvedChart,
    ) -> Result<Self::Instance, BackendError>;
}

/// A region of the live document that may hold chart surfaces.
pub trait Container {
    /// Surface type handed to the backend.
    type Surface;

    /// Find the surface whose element id equals `id`.
    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    /// Element ids of every drawing surface in this region.
    fn surface_ids(&self) -> Vec<String>;
}
