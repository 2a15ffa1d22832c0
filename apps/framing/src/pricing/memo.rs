//! Quote memoization keyed by the full pricing input.
//!
//! Quotes are pure functions of (family, request), so a cached quote is always equal to
//! a fresh one. Errors are never cached.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::catalog::{Catalog, Hardware, MatType, ProductFamily};
use crate::errors::CatalogError;
use crate::pricing::engine::{PricingEngine, PricingRequest, Quote};

const DEFAULT_CAPACITY: usize = 1024;

/// Hashable identity of a `PricingRequest`. Floats are keyed by their bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PricingKey {
    frame_style_id: Option<String>,
    layout_id: String,
    size_id: String,
    mat_type: MatType,
    mat_border_bits: u64,
    glass_type_id: Option<String>,
    hardware: Hardware,
    nameplate_enabled: bool,
    bottom_weighted: bool,
}

impl PricingRequest {
    pub fn memo_key(&self) -> PricingKey {
        PricingKey {
            frame_style_id: self.frame_style_id.clone(),
            layout_id: self.layout_id.clone(),
            size_id: self.size_id.clone(),
            mat_type: self.mat_type,
            mat_border_bits: self.mat_border.to_bits(),
            glass_type_id: self.glass_type_id.clone(),
            hardware: self.hardware,
            nameplate_enabled: self.nameplate_enabled,
            bottom_weighted: self.bottom_weighted,
        }
    }
}

/// Bounded quote cache shared across requests. When full it is cleared wholesale.
#[derive(Debug)]
pub struct QuoteMemo {
    entries: Mutex<HashMap<(ProductFamily, PricingKey), Quote>>,
    capacity: usize,
}

impl Default for QuoteMemo {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl QuoteMemo {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached quote for `request`, pricing and caching it on a miss.
    pub fn quote(
        &self,
        engine: &PricingEngine,
        catalog: &Catalog,
        request: &PricingRequest,
    ) -> Result<Quote, CatalogError> {
        let key = (catalog.family(), request.memo_key());
        if let Some(hit) = self
            .entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&key)
        {
            return Ok(hit.clone());
        }

        let quote = engine.quote(catalog, request)?;

        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(key, quote.clone());
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::catalog::Materials;
    use crate::errors::PricingError;
    use crate::pricing::delegate::{DelegateBreakdown, FrameConfiguration, FramePricer};
    use crate::pricing::engine::Surcharges;

    struct CountingPricer(AtomicUsize);

    impl FramePricer for CountingPricer {
        fn price(&self, _config: &FrameConfiguration) -> Result<DelegateBreakdown, PricingError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(DelegateBreakdown {
                frame_price: 50.0,
                mat_price: 5.0,
                glass_price: 5.0,
            })
        }
    }

    fn make_request(layout_id: &str) -> PricingRequest {
        PricingRequest {
            frame_style_id: Some("walnut-gallery".to_string()),
            layout_id: layout_id.to_string(),
            size_id: "standard-letter".to_string(),
            ..PricingRequest::default()
        }
    }

    fn make_engine(pricer: Arc<CountingPricer>) -> PricingEngine {
        PricingEngine::new(
            pricer,
            Arc::new(Materials::builtin().unwrap()),
            Surcharges::default(),
        )
    }

    #[test]
    fn test_repeat_request_hits_cache() {
        let pricer = Arc::new(CountingPricer(AtomicUsize::new(0)));
        let engine = make_engine(pricer.clone());
        let catalog = Catalog::for_family(ProductFamily::Magazine).unwrap();
        let memo = QuoteMemo::default();

        let first = memo.quote(&engine, &catalog, &make_request("4-quad")).unwrap();
        let second = memo.quote(&engine, &catalog, &make_request("4-quad")).unwrap();

        assert_eq!(first, second);
        assert_eq!(pricer.0.load(Ordering::SeqCst), 1);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_key_distinguishes_border_and_family() {
        let a = make_request("single");
        let b = PricingRequest {
            mat_border: 2.5,
            ..make_request("single")
        };
        assert_ne!(a.memo_key(), b.memo_key());

        let pricer = Arc::new(CountingPricer(AtomicUsize::new(0)));
        let engine = make_engine(pricer.clone());
        let memo = QuoteMemo::default();
        let magazines = Catalog::for_family(ProductFamily::Magazine).unwrap();
        let comics = Catalog::for_family(ProductFamily::Comic).unwrap();
        memo.quote(&engine, &magazines, &a).unwrap();
        memo.quote(&engine, &comics, &a).unwrap();
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let pricer = Arc::new(CountingPricer(AtomicUsize::new(0)));
        let engine = make_engine(pricer);
        let catalog = Catalog::for_family(ProductFamily::Magazine).unwrap();
        let memo = QuoteMemo::default();

        assert!(memo.quote(&engine, &catalog, &make_request("nope")).is_err());
        assert!(memo.is_empty());
    }

    #[test]
    fn test_full_cache_is_cleared() {
        let pricer = Arc::new(CountingPricer(AtomicUsize::new(0)));
        let engine = make_engine(pricer);
        let catalog = Catalog::for_family(ProductFamily::Magazine).unwrap();
        let memo = QuoteMemo::with_capacity(2);

        for id in ["single", "2-horizontal", "4-quad"] {
            memo.quote(&engine, &catalog, &make_request(id)).unwrap();
        }
        assert_eq!(memo.len(), 1);
    }
}
