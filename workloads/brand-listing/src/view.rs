//! Brand view controller.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::stream::BoxStream;
use futures::StreamExt;
use tokio::sync::watch;
use turbo_catalog::{Brand, CategoryNode, Product};
use turbo_core::{QueryParams, RouteParams, RouteStreams, Subscriptions, ViewId, ViewPhase};
use turbo_data::BrandsService;
use turbo_observability::ViewLogger;
use turbo_seo::{meta_tags, SeoSink};

use crate::error::ViewError;
use crate::filter::ProductList;
use crate::state::{ListingSnapshot, ListingState};

/// Route parameter naming the brand.
pub const BRAND_SLUG_PARAM: &str = "brandSlug";

/// State and collaborators shared with the view's tasks.
struct Shared {
    state: Mutex<ListingState>,
    filtered_tx: watch::Sender<ProductList>,
    logger: ViewLogger,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ListingState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a fetch for a route change; `None` once torn down.
    fn begin_fetch(&self) -> Option<u64> {
        let mut state = self.lock();
        if !state.active {
            return None;
        }
        Some(state.begin_fetch())
    }

    fn products_loaded(&self, brand_slug: &str, generation: u64, products: Vec<Product>) {
        let count = products.len();
        {
            let mut state = self.lock();
            if !state.active || state.generation != generation {
                return;
            }
            state.load(products);
            self.filtered_tx.send_replace(Arc::clone(&state.filtered));
        }
        self.logger.phase(&ViewPhase::ProductsLoaded {
            brand_slug: brand_slug.to_string(),
            count,
        });
    }

    fn query_changed(&self, query: QueryParams) {
        let count = {
            let mut state = self.lock();
            if !state.active {
                return;
            }
            state.apply_query(query);
            self.filtered_tx.send_replace(Arc::clone(&state.filtered));
            state.filtered.len()
        };
        self.logger.phase(&ViewPhase::Filtered { count });
    }
}

/// Builder for a `BrandView`.
pub struct BrandViewBuilder {
    brand: Brand,
    service: Option<Arc<dyn BrandsService>>,
    seo: Option<Arc<dyn SeoSink>>,
    logger: Option<ViewLogger>,
}

impl BrandViewBuilder {
    /// Set the products service.
    pub fn service(mut self, service: Arc<dyn BrandsService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the SEO sink that receives title and meta tags.
    pub fn seo(mut self, seo: Arc<dyn SeoSink>) -> Self {
        self.seo = Some(seo);
        self
    }

    /// Set the logger. Defaults to a JSON logger with a fresh view ID.
    pub fn logger(mut self, logger: ViewLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Mount the view: set page metadata and subscribe to both route streams.
    ///
    /// Must be called from within a tokio runtime.
    pub fn init(self, routes: RouteStreams) -> Result<BrandView, ViewError> {
        let service = self.service.ok_or(ViewError::MissingService)?;
        let seo = self.seo.ok_or(ViewError::MissingSeoSink)?;
        tokio::runtime::Handle::try_current().map_err(|_| ViewError::NoRuntime)?;

        let logger = self
            .logger
            .unwrap_or_else(|| ViewLogger::new(ViewId::generate()).with_view("brand"));

        seo.set_title(&self.brand.meta_title);
        seo.set_meta_tags(&meta_tags(&self.brand));

        let (filtered_tx, _) = watch::channel(Arc::new(Vec::new()));
        let shared = Arc::new(Shared {
            state: Mutex::new(ListingState::new(self.brand)),
            filtered_tx,
            logger,
        });
        let subscriptions = Subscriptions::new();

        spawn_params_listener(&subscriptions, &shared, service, routes.params);
        spawn_query_listener(&subscriptions, &shared, routes.query);

        shared.logger.phase(&ViewPhase::Init);
        Ok(BrandView {
            shared,
            subscriptions,
        })
    }
}

fn spawn_params_listener(
    subscriptions: &Subscriptions,
    shared: &Arc<Shared>,
    service: Arc<dyn BrandsService>,
    mut params: BoxStream<'static, RouteParams>,
) {
    let subs = subscriptions.clone();
    let shared = Arc::clone(shared);

    subscriptions.spawn(async move {
        while let Some(params) = params.next().await {
            let Some(brand_slug) = params.get(BRAND_SLUG_PARAM).cloned() else {
                shared
                    .logger
                    .warn_builder("route params without brand slug")
                    .field("param", BRAND_SLUG_PARAM)
                    .emit();
                continue;
            };
            let Some(generation) = shared.begin_fetch() else {
                break;
            };

            let shared = Arc::clone(&shared);
            let service = Arc::clone(&service);
            subs.spawn(async move {
                match service.get_brand_products(&brand_slug).await {
                    Ok(products) => shared.products_loaded(&brand_slug, generation, products),
                    Err(e) => shared.logger.phase(&ViewPhase::Error(format!(
                        "fetching products for {}: {}",
                        brand_slug, e
                    ))),
                }
            });
        }
    });
}

fn spawn_query_listener(
    subscriptions: &Subscriptions,
    shared: &Arc<Shared>,
    mut query: BoxStream<'static, QueryParams>,
) {
    let shared = Arc::clone(shared);
    subscriptions.spawn(async move {
        while let Some(query) = query.next().await {
            shared.query_changed(query);
        }
    });
}

/// Product listing view for one brand.
///
/// Loads the brand's products whenever the `brandSlug` route parameter
/// changes and re-filters the loaded list whenever the query changes.
/// Dropping the view tears it down.
pub struct BrandView {
    shared: Arc<Shared>,
    subscriptions: Subscriptions,
}

impl BrandView {
    /// Start building a view for a pre-resolved brand.
    pub fn builder(brand: Brand) -> BrandViewBuilder {
        BrandViewBuilder {
            brand,
            service: None,
            seo: None,
            logger: None,
        }
    }

    /// The brand this view was mounted for.
    pub fn brand(&self) -> Brand {
        self.shared.lock().brand.clone()
    }

    /// Full product list for the current brand.
    pub fn products(&self) -> ProductList {
        Arc::clone(&self.shared.lock().products)
    }

    /// Product list after the current query's filter.
    pub fn filtered_products(&self) -> ProductList {
        Arc::clone(&self.shared.lock().filtered)
    }

    /// Category tree derived from the full product list.
    pub fn categories(&self) -> Arc<Vec<CategoryNode>> {
        Arc::clone(&self.shared.lock().categories)
    }

    /// Most recent query parameters.
    pub fn query(&self) -> QueryParams {
        self.shared.lock().query.clone()
    }

    /// Whether `slug` is the current `catSlug` filter, for highlighting.
    pub fn is_active(&self, slug: &str) -> bool {
        self.shared.lock().active_category() == Some(slug)
    }

    /// Receive every new filtered list.
    pub fn watch_filtered(&self) -> watch::Receiver<ProductList> {
        self.shared.filtered_tx.subscribe()
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> ListingSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn view_id(&self) -> &ViewId {
        self.shared.logger.view_id()
    }

    /// Whether the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.shared.lock().active
    }

    /// Release all subscriptions. No state changes after this returns.
    pub fn teardown(&self) {
        let was_active = std::mem::replace(&mut self.shared.lock().active, false);
        self.subscriptions.teardown();
        if was_active {
            self.shared.logger.phase(&ViewPhase::Teardown);
        }
    }
}

impl Drop for BrandView {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for BrandView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandView")
            .field("view_id", self.view_id())
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}
