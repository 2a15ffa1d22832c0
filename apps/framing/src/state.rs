use std::sync::Arc;

use crate::catalog::{Catalog, Catalogs, Materials, ProductFamily};
use crate::config::Config;
use crate::errors::CatalogError;
use crate::pricing::{FramePricer, PerimeterFramePricer, PricingEngine, QuoteMemo, Surcharges};
use crate::sizing::availability::SheetLimits;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind it is read-only after startup except the quote cache.
#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<Catalogs>,
    /// Multi-opening pricing over a pluggable single-frame pricer.
    pub pricing: PricingEngine,
    pub quotes: Arc<QuoteMemo>,
    pub config: Config,
}

impl AppState {
    /// Built-in catalogs and materials with the perimeter pricer.
    pub fn builtin(config: Config) -> Result<Self, CatalogError> {
        let materials = Arc::new(Materials::builtin()?);
        let pricer: Arc<dyn FramePricer> = Arc::new(PerimeterFramePricer::new(materials.clone()));
        Self::with_pricer(config, materials, pricer)
    }

    pub fn with_pricer(
        config: Config,
        materials: Arc<Materials>,
        pricer: Arc<dyn FramePricer>,
    ) -> Result<Self, CatalogError> {
        let surcharges = Surcharges {
            fallback_frame_price: config.fallback_frame_price,
            ..Surcharges::default()
        };

        Ok(AppState {
            catalogs: Arc::new(Catalogs::builtin()?),
            pricing: PricingEngine::new(pricer, materials, surcharges),
            quotes: Arc::new(QuoteMemo::default()),
            config,
        })
    }

    pub fn catalog(&self, family: ProductFamily) -> &Catalog {
        self.catalogs.get(family)
    }

    pub fn sheet_limits(&self) -> &SheetLimits {
        &self.config.sheet_limits
    }
}
