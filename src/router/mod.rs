// ============================================================================
// ROUTER - Resolución de rutas + History API
// ============================================================================
// Router es un handle barato de clonar (Rc). Se construye una vez en el
// arranque con la tabla y la estrategia de historial, y se inyecta en App.
// ============================================================================

pub mod history;
pub mod matcher;
pub mod routes;

pub use history::{History, MemoryHistory, WebHistory};
pub use matcher::{resolve, Location, MAX_REDIRECTS};
pub use routes::{route_table, RouteTable};

use std::rc::{Rc, Weak};

use crate::error::RouterError;
use crate::models::{Resolution, ResolvedRoute};
use crate::state::ReactiveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationMode {
    Push,
    Replace,
}

struct RouterInner {
    table: RouteTable,
    history: Box<dyn History>,
    /// None hasta la navegación inicial (start)
    current: ReactiveState<Option<Resolution>>,
}

#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    pub fn new(table: RouteTable, history: impl History + 'static) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                table,
                history: Box::new(history),
                current: ReactiveState::new(None),
            }),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }

    /// Resuelve sin navegar
    pub fn resolve(&self, to: &str) -> Result<Resolution, RouterError> {
        resolve(&self.inner.table, to)
    }

    pub fn current(&self) -> Option<Resolution> {
        self.inner.current.get()
    }

    pub fn current_route(&self) -> Option<ResolvedRoute> {
        self.inner
            .current
            .with(|current| current.as_ref().and_then(|r| r.route().cloned()))
    }

    /// Avisar cuando cambia la ruta actual
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Option<Resolution>) + 'static,
    {
        self.inner.current.subscribe(callback);
    }

    /// href para usar en enlaces <a>
    pub fn href(&self, to: &str) -> String {
        self.inner.history.create_href(to)
    }

    /// Navegación inicial + listener de back/forward
    pub fn start(&self) -> Result<(), RouterError> {
        let location = self.inner.history.location();
        log::info!("🧭 [ROUTER] Navegación inicial: {}", location);
        self.settle(self.resolve(&location)?)?;

        let weak: Weak<RouterInner> = Rc::downgrade(&self.inner);
        self.inner.history.listen(Rc::new(move |location: String| {
            if let Some(inner) = weak.upgrade() {
                Router { inner }.on_pop(&location);
            }
        }))
    }

    pub fn push(&self, to: &str) -> Result<(), RouterError> {
        self.navigate(to, NavigationMode::Push)
    }

    pub fn replace(&self, to: &str) -> Result<(), RouterError> {
        self.navigate(to, NavigationMode::Replace)
    }

    /// Navegar por nombre de ruta ("Photos", "Albums", "Random")
    pub fn push_named(&self, name: &str) -> Result<(), RouterError> {
        let path = self
            .inner
            .table
            .find_by_name(name)
            .map(|entry| entry.path)
            .ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))?;
        self.push(path)
    }

    pub fn back(&self) -> Result<(), RouterError> {
        self.inner.history.go(-1)
    }

    pub fn forward(&self) -> Result<(), RouterError> {
        self.inner.history.go(1)
    }

    fn navigate(&self, to: &str, mode: NavigationMode) -> Result<(), RouterError> {
        let resolution = self.resolve(to)?;
        let target = resolution.full_path().to_string();

        let duplicated = self
            .inner
            .current
            .with(|current| current.as_ref().map(|c| c.is_same_location(&resolution)))
            .unwrap_or(false);
        if duplicated {
            log::debug!("🧭 [ROUTER] Navegación duplicada a {}, ignorada", target);
            return Ok(());
        }

        match mode {
            NavigationMode::Push => self.inner.history.push(&target)?,
            NavigationMode::Replace => self.inner.history.replace(&target)?,
        }
        self.commit(resolution);
        Ok(())
    }

    /// Ubicación que ya está en el historial (inicial o popstate):
    /// si hubo redirect se corrige la barra con replace
    fn settle(&self, resolution: Resolution) -> Result<(), RouterError> {
        if let Resolution::Matched(route) = &resolution {
            if route.redirected_from.is_some() {
                self.inner.history.replace(&route.full_path)?;
            }
        }
        self.commit(resolution);
        Ok(())
    }

    fn on_pop(&self, location: &str) {
        log::debug!("🧭 [ROUTER] popstate: {}", location);
        let result = self.resolve(location).and_then(|r| self.settle(r));
        if let Err(e) = result {
            log::error!("❌ [ROUTER] Error en popstate: {}", e);
        }
    }

    fn commit(&self, resolution: Resolution) {
        match &resolution {
            Resolution::Matched(route) => log::info!(
                "✅ [ROUTER] {} -> {}",
                route.full_path,
                route.view.title()
            ),
            Resolution::NoMatch { path } => {
                log::warn!("⚠️ [ROUTER] No match found for location with path {:?}", path)
            }
        }
        self.inner.current.set(Some(resolution));
    }
}
