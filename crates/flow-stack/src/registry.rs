// Archivo: registry.rs
// Propósito: descubrimiento de proveedores de snapshots.
//
// `ProviderRegistry` es un registro explícito que resuelve a un resultado
// etiquetado (`Resolution`). `LazyProvider` ejecuta el descubrimiento una
// única vez y reutiliza el resultado. En el borde del proceso hay un
// registro global y un `LazyProvider` global (`register_provider`,
// `instance`).
use crate::errors::{Result, SnapshotError};
use crate::noop::NoopProvider;
use crate::provider::SnapshotProvider;
use indexmap::IndexMap;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::{Arc, Mutex, MutexGuard};

/// Resultado del descubrimiento.
#[derive(Clone)]
pub enum Resolution {
    /// Exactamente una implementación registrada.
    Resolved(Arc<dyn SnapshotProvider>),
    /// Ninguna implementación registrada.
    NoneFound,
    /// Más de una implementación; nombres en orden de registro.
    Ambiguous(Vec<String>),
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Resolved(_) => f.write_str("Resolved(..)"),
            Resolution::NoneFound => f.write_str("NoneFound"),
            Resolution::Ambiguous(names) => f.debug_tuple("Ambiguous").field(names).finish(),
        }
    }
}

/// Qué hacer cuando el descubrimiento es ambiguo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityPolicy {
    /// Usar `NoopProvider` y dejar un warning.
    #[default]
    FallbackToDefault,
    /// Devolver `SnapshotError::AmbiguousProvider`.
    Fail,
}

impl Resolution {
    /// Proveedor efectivo según la política. `NoneFound` siempre cae en
    /// `default`. No registra nada: `LazyProvider` avisa de la ambigüedad
    /// una sola vez, al resolver.
    pub fn select(&self, default: &Arc<dyn SnapshotProvider>, policy: AmbiguityPolicy) -> Result<Arc<dyn SnapshotProvider>> {
        match self {
            Resolution::Resolved(p) => Ok(p.clone()),
            Resolution::NoneFound => Ok(default.clone()),
            Resolution::Ambiguous(names) => match policy {
                AmbiguityPolicy::FallbackToDefault => Ok(default.clone()),
                AmbiguityPolicy::Fail => Err(SnapshotError::AmbiguousProvider(names.clone())),
            },
        }
    }
}

/// Registro explícito de implementaciones, ordenado por registro.
///
/// Una vez sellado (`seal_and_resolve`) no admite más registros.
#[derive(Default)]
pub struct ProviderRegistry {
    state: Mutex<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    entries: IndexMap<String, Arc<dyn SnapshotProvider>>,
    sealed: bool,
}

impl RegistryState {
    fn resolve(&self) -> Resolution {
        match self.entries.len() {
            0 => Resolution::NoneFound,
            1 => Resolution::Resolved(self.entries[0].clone()),
            _ => Resolution::Ambiguous(self.entries.keys().cloned().collect()),
        }
    }
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registra un proveedor. Un nombre repetido reemplaza la entrada previa.
    /// Devuelve `false` si el registro ya estaba sellado; la comprobación y
    /// la inserción ocurren bajo el mismo lock que el sellado.
    pub fn register(&self, name: impl Into<String>, provider: Arc<dyn SnapshotProvider>) -> bool {
        let name = name.into();
        let mut state = self.lock();
        if state.sealed {
            log::warn!("proveedor de snapshots '{}' registrado tras el descubrimiento; se ignora", name);
            return false;
        }
        if state.entries.insert(name.clone(), provider).is_some() {
            log::debug!("proveedor de snapshots '{}' reemplazado", name);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().entries.keys().cloned().collect()
    }

    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }

    pub fn resolve(&self) -> Resolution {
        self.lock().resolve()
    }

    /// Sella el registro y resuelve en el mismo paso.
    pub fn seal_and_resolve(&self) -> Resolution {
        let mut state = self.lock();
        state.sealed = true;
        state.resolve()
    }
}

type Discovery = Box<dyn Fn() -> Resolution + Send + Sync>;

/// Proveedor resuelto de forma perezosa y como mucho una vez.
///
/// Varias hebras pueden pedirlo a la vez: el descubrimiento corre una sola
/// vez y el resto espera el mismo resultado.
pub struct LazyProvider {
    resolution: OnceCell<Resolution>,
    discover: Discovery,
    default: Arc<dyn SnapshotProvider>,
}

impl LazyProvider {
    pub fn new<F>(discover: F) -> Self
        where F: Fn() -> Resolution + Send + Sync + 'static
    {
        Self { resolution: OnceCell::new(),
               discover: Box::new(discover),
               default: Arc::new(NoopProvider::new()) }
    }

    /// Descubre a partir de un registro compartido, que queda sellado.
    pub fn from_registry(registry: Arc<ProviderRegistry>) -> Self {
        Self::new(move || registry.seal_and_resolve())
    }

    pub fn resolution(&self) -> &Resolution {
        self.resolution.get_or_init(|| {
                           let r = (self.discover)();
                           log::debug!("descubrimiento de proveedor de snapshots: {:?}", r);
                           if let Resolution::Ambiguous(names) = &r {
                               log::warn!("{} proveedores de snapshots registrados ({}); sin política estricta se usa el proveedor no-op",
                                          names.len(),
                                          names.join(", "));
                           }
                           r
                       })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.get().is_some()
    }

    /// Proveedor efectivo según `policy`.
    pub fn provider(&self, policy: AmbiguityPolicy) -> Result<Arc<dyn SnapshotProvider>> {
        self.resolution().select(&self.default, policy)
    }

    /// Proveedor efectivo con caída al no-op; nunca falla.
    pub fn get(&self) -> Arc<dyn SnapshotProvider> {
        match self.resolution().select(&self.default, AmbiguityPolicy::FallbackToDefault) {
            Ok(p) => p,
            Err(_) => self.default.clone(),
        }
    }
}

static GLOBAL_REGISTRY: Lazy<Arc<ProviderRegistry>> = Lazy::new(|| Arc::new(ProviderRegistry::new()));

static INSTANCE: Lazy<LazyProvider> = Lazy::new(|| LazyProvider::from_registry(GLOBAL_REGISTRY.clone()));

/// Registra un proveedor en el registro del proceso. Debe hacerse antes del
/// primer acceso a `instance`; después se ignora y devuelve `false`.
pub fn register_provider(name: impl Into<String>, provider: Arc<dyn SnapshotProvider>) -> bool {
    GLOBAL_REGISTRY.register(name, provider)
}

/// Proveedor del proceso (caída al no-op si no hay uno único).
pub fn instance() -> Arc<dyn SnapshotProvider> {
    INSTANCE.get()
}

/// Proveedor del proceso aplicando `policy` a la ambigüedad.
pub fn instance_with(policy: AmbiguityPolicy) -> Result<Arc<dyn SnapshotProvider>> {
    INSTANCE.provider(policy)
}
