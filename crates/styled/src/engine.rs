//! The style engine: theme installation, acquisition, extraction.

use crate::component::StyledComponent;
use crate::error::{EngineError, ErrorBoundary};
use crate::handle::StyleHandle;
use crate::merge::merge_classes;
use crate::options::UseStylesOptions;
use parking_lot::RwLock;
use sheet_registry::{
    BufferSink, CacheKey, ClassNameGenerator, CompiledStyleSheet, InjectionSink,
    InsertionRegistry, NamingMode, SheetCache, SweepPolicy, compile_and_register,
};
use std::sync::Arc;
use theme::Theme;

/// Engine construction knobs.
#[derive(Copy, Clone, Debug, Default)]
pub struct EngineConfig {
    /// How generated class names are rendered.
    pub naming: NamingMode,
    /// When zero-reference cache entries are evicted.
    pub sweep: SweepPolicy,
}

/// The style composition engine.
///
/// Owns the only process-wide state the core has — the sheet cache and the
/// insertion-ordered registry — as instance state: construct a fresh engine
/// per test (or per logical document) instead of sharing a singleton. One
/// engine is safe to share across threads; server renderers typically hold
/// one per process behind an `Arc`.
pub struct StyleEngine {
    theme: RwLock<Arc<Theme>>,
    names: ClassNameGenerator,
    registry: InsertionRegistry,
    cache: SheetCache,
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("theme", &self.theme.read().fingerprint())
            .field("cached_sheets", &self.cache.len())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl StyleEngine {
    /// Create an engine writing to an internal buffer sink.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sink(config, Arc::new(BufferSink::new()))
    }

    /// Create an engine writing to the given injection sink.
    pub fn with_sink(config: EngineConfig, sink: Arc<dyn InjectionSink>) -> Self {
        Self {
            theme: RwLock::new(Arc::new(Theme::default())),
            names: ClassNameGenerator::new(config.naming),
            registry: InsertionRegistry::new(sink),
            cache: SheetCache::new(config.sweep),
        }
    }

    /// Install a new theme snapshot.
    ///
    /// Class names are identity handles and stay stable; sheets compiled
    /// under the previous snapshot stay cached (and registered) until their
    /// holders release them, so a live switch mid-render is safe.
    pub fn set_theme(&self, theme: Theme) {
        let fingerprint = theme.fingerprint();
        *self.theme.write() = Arc::new(theme);
        log::info!("theme installed, fingerprint {fingerprint}");
    }

    /// The active theme snapshot.
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.theme.read())
    }

    /// Acquire styles for a component under the active theme.
    pub fn use_styles<'engine>(
        &'engine self,
        component: &StyledComponent,
    ) -> Result<StyleHandle<'engine>, EngineError> {
        self.use_styles_with(component, UseStylesOptions::new())
    }

    /// Acquire styles with consumer classes and an optional inline override.
    ///
    /// On success the returned handle exposes per-slot class lists and
    /// releases everything it acquired on drop. The override definition, if
    /// any, registers after the base sheet so its rules win ties under
    /// equal specificity.
    pub fn use_styles_with<'engine>(
        &'engine self,
        component: &StyledComponent,
        options: UseStylesOptions,
    ) -> Result<StyleHandle<'engine>, EngineError> {
        let theme = self.theme();
        self.use_styles_under(component, &theme, options)
    }

    /// Acquire styles under an explicit theme snapshot instead of the
    /// installed one.
    ///
    /// Server renderers use this to style concurrent requests, each with
    /// its own per-request theme, against the shared cache.
    pub fn use_styles_under<'engine>(
        &'engine self,
        component: &StyledComponent,
        theme: &Theme,
        options: UseStylesOptions,
    ) -> Result<StyleHandle<'engine>, EngineError> {
        let fingerprint = theme.fingerprint();

        let base_key = CacheKey::new(component.name(), fingerprint);
        let base = self.acquire_sheet(component, theme, &base_key)?;
        let mut acquired = vec![base_key.clone()];

        let override_sheet = match &options.overrides {
            None => None,
            Some(override_component) => {
                let key = CacheKey::new(override_component.name(), fingerprint);
                match self.acquire_sheet(override_component, theme, &key) {
                    Ok(sheet) => {
                        acquired.push(key);
                        Some(sheet)
                    }
                    Err(error) => {
                        // Back out the base acquisition before propagating.
                        self.release_key(&base_key);
                        return Err(error);
                    }
                }
            }
        };

        let classes = merge_classes(&base, &options.classes, override_sheet.as_deref());
        Ok(StyleHandle::new(self, acquired, classes))
    }

    /// Acquire styles, falling back to an unstyled handle on failure.
    ///
    /// The component renders without styling information rather than
    /// crashing its tree; the error still reaches `boundary` — it is never
    /// swallowed.
    pub fn use_styles_or_unstyled<'engine>(
        &'engine self,
        component: &StyledComponent,
        options: UseStylesOptions,
        boundary: &dyn ErrorBoundary,
    ) -> StyleHandle<'engine> {
        match self.use_styles_with(component, options) {
            Ok(handle) => handle,
            Err(error) => {
                boundary.report(&error);
                StyleHandle::unstyled(self)
            }
        }
    }

    /// All rule text registered in this engine, in insertion order.
    ///
    /// For server rendering: embed the result in the initial document so
    /// the first paint matches pre-hydration output.
    pub fn extract_critical_styles(&self) -> String {
        self.registry.serialize()
    }

    /// Run an eviction sweep now. Returns how many entries were evicted.
    pub fn sweep(&self) -> usize {
        self.cache.sweep(&self.registry)
    }

    /// Resident cache entries (for diagnostics and tests).
    pub fn cached_sheets(&self) -> usize {
        self.cache.len()
    }

    /// Reference count for a component under the active theme, if cached.
    pub fn refs(&self, component: &str) -> Option<u64> {
        let fingerprint = self.theme.read().fingerprint();
        self.cache.refs(&CacheKey::new(component, fingerprint))
    }

    fn acquire_sheet(
        &self,
        component: &StyledComponent,
        theme: &Theme,
        key: &CacheKey,
    ) -> Result<Arc<CompiledStyleSheet>, EngineError> {
        self.cache
            .acquire(key, || {
                compile_and_register(
                    component.name(),
                    component.definition(),
                    theme,
                    &self.names,
                    &self.registry,
                )
            })
            .map_err(|source| EngineError::Compile {
                component: component.name().to_owned(),
                source,
            })
    }

    pub(crate) fn release_key(&self, key: &CacheKey) {
        if let Err(error) = self.cache.release(key) {
            // Release runs on handle drop; surface the lifecycle bug loudly
            // instead of unwinding.
            log::error!("{error}");
            return;
        }
        if self.cache.wants_sweep() {
            self.cache.sweep(&self.registry);
        }
    }
}
