//! End-to-end behaviour of the brand listing view.

use std::sync::Arc;

use async_trait::async_trait;
use brand_listing::{BrandView, ViewError};
use tokio::sync::Notify;
use turbo_catalog::{Brand, Category, Product};
use turbo_core::{Navigator, QueryParams, RouteParams, RoutePattern, RouteStreams};
use turbo_data::{BrandsService, FetchError, InMemoryBrands};
use turbo_seo::{DocumentHead, SeoSink};

fn product(id: &str, part: &str, sub: &str, cat: &str) -> Product {
    Product::new(
        id,
        format!("Product {id}"),
        format!("product-{id}"),
        Category::new(part, part.to_uppercase()).with_parent(
            Category::new(sub, sub.to_uppercase()).with_parent(Category::new(cat, cat.to_uppercase())),
        ),
    )
}

fn acme_products() -> Vec<Product> {
    vec![product("1", "p1", "s1", "c1"), product("2", "p2", "s2", "c1")]
}

fn brand() -> Brand {
    Brand::new("b1", "acme", "Acme")
        .with_meta_title("Acme Parts")
        .with_meta_description("Genuine Acme parts")
}

fn brands() -> InMemoryBrands {
    InMemoryBrands::new()
        .with_brand("acme", acme_products())
        .with_brand("zenith", vec![product("9", "p9", "s9", "c9")])
}

fn query(pairs: &[(&str, &str)]) -> QueryParams {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn ids(view: &BrandView) -> Vec<String> {
    view.filtered_products()
        .iter()
        .map(|p| p.id.to_string())
        .collect()
}

/// Let spawned listeners drain their streams.
async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

fn mount(service: Arc<dyn BrandsService>) -> (BrandView, Navigator, Arc<DocumentHead>) {
    let head = Arc::new(DocumentHead::new());
    let (navigator, routes) = RouteStreams::channel();
    let view = BrandView::builder(brand())
        .service(service)
        .seo(head.clone())
        .init(routes)
        .expect("view mounts");
    let navigator = navigator.with_pattern(RoutePattern::new("/brands/:brandSlug"));
    (view, navigator, head)
}

#[tokio::test]
async fn init_sets_page_metadata() {
    let (view, _nav, head) = mount(Arc::new(brands()));

    let content = head.snapshot();
    assert_eq!(content.title.as_deref(), Some("Acme Parts"));
    assert_eq!(content.meta.get("description"), Some("Genuine Acme parts"));
    assert_eq!(content.meta.get("og:title"), Some("Acme Parts"));
    assert_eq!(view.brand().slug, "acme");
    assert!(view.is_mounted());
}

#[tokio::test]
async fn route_change_loads_products_and_tree() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));

    nav.navigate("/brands/acme").unwrap();
    settle().await;

    assert_eq!(view.products().len(), 2);
    assert!(Arc::ptr_eq(&view.products(), &view.filtered_products()));

    let tree = view.categories();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].slug, "c1");
    assert_eq!(tree[0].children.len(), 2);
}

#[tokio::test]
async fn query_filters_each_level() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme").unwrap();
    settle().await;

    nav.navigate("/brands/acme?catSlug=c1").unwrap();
    settle().await;
    assert_eq!(ids(&view), vec!["1", "2"]);

    nav.navigate("/brands/acme?subCatSlug=s1").unwrap();
    settle().await;
    assert_eq!(ids(&view), vec!["1"]);

    nav.navigate("/brands/acme?partSlug=p2").unwrap();
    settle().await;
    assert_eq!(ids(&view), vec!["2"]);
}

#[tokio::test]
async fn most_specific_key_wins_when_several_present() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme").unwrap();
    settle().await;

    // partSlug is processed after catSlug, so it decides the result.
    nav.set_query(query(&[("partSlug", "p2"), ("catSlug", "c1")]));
    settle().await;
    assert_eq!(ids(&view), vec!["2"]);
}

#[tokio::test]
async fn unrecognized_query_keeps_full_list() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme?partSlug=p1").unwrap();
    settle().await;

    nav.navigate("/brands/acme?sort=price").unwrap();
    settle().await;
    assert!(Arc::ptr_eq(&view.products(), &view.filtered_products()));
}

#[tokio::test]
async fn repeated_query_is_idempotent() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme").unwrap();
    settle().await;

    nav.set_query(query(&[("subCatSlug", "s2")]));
    settle().await;
    let once = view.filtered_products();

    // Bypass the navigator's change detection to deliver the same query again.
    nav.set_query(QueryParams::new());
    nav.set_query(query(&[("subCatSlug", "s2")]));
    settle().await;
    assert_eq!(once, view.filtered_products());
}

#[tokio::test]
async fn is_active_tracks_cat_slug() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme?catSlug=c1").unwrap();
    settle().await;

    assert!(view.is_active("c1"));
    assert!(!view.is_active("c2"));

    nav.navigate("/brands/acme?subCatSlug=c1").unwrap();
    settle().await;
    assert!(!view.is_active("c1"));
}

#[tokio::test]
async fn no_changes_after_teardown() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme").unwrap();
    settle().await;
    nav.set_query(query(&[("catSlug", "c1")]));
    settle().await;

    view.teardown();
    let before = view.filtered_products();

    nav.set_query(query(&[("partSlug", "p2")]));
    nav.set_params(RouteParams::from([("brandSlug".to_string(), "zenith".to_string())]));
    settle().await;

    assert!(Arc::ptr_eq(&before, &view.filtered_products()));
    assert_eq!(view.products().len(), 2);
    assert!(view.is_active("c1"));
    assert!(!view.is_mounted());

    view.teardown();
}

#[tokio::test]
async fn dropping_view_releases_route_streams() {
    let (view, nav, _head) = mount(Arc::new(brands()));
    assert!(nav.is_connected());

    drop(view);
    settle().await;
    assert!(!nav.is_connected());
}

#[tokio::test]
async fn query_before_products_filters_empty_list() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));

    nav.set_query(query(&[("catSlug", "c1")]));
    settle().await;
    assert!(view.filtered_products().is_empty());

    nav.set_params(RouteParams::from([("brandSlug".to_string(), "acme".to_string())]));
    settle().await;
    // A fresh listing replaces the filtered list wholesale.
    assert_eq!(ids(&view), vec!["1", "2"]);
    assert!(view.is_active("c1"));
}

#[tokio::test]
async fn deep_link_shows_full_listing_until_next_query() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));

    // Params and query arrive together; the listing lands after the query.
    nav.navigate("/brands/acme?subCatSlug=s2").unwrap();
    settle().await;

    assert_eq!(ids(&view), vec!["1", "2"]);
    assert!(Arc::ptr_eq(&view.products(), &view.filtered_products()));
    assert_eq!(view.query().get("subCatSlug").map(String::as_str), Some("s2"));

    nav.navigate("/brands/acme?subCatSlug=s1").unwrap();
    settle().await;
    assert_eq!(ids(&view), vec!["1"]);
}

#[tokio::test]
async fn fetch_failure_leaves_state_untouched() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme").unwrap();
    settle().await;

    nav.navigate("/brands/unknown").unwrap();
    settle().await;

    assert_eq!(view.products().len(), 2);
    assert!(view.is_mounted());
}

#[tokio::test]
async fn params_without_brand_slug_are_ignored() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));

    nav.set_params(RouteParams::from([("id".to_string(), "acme".to_string())]));
    settle().await;
    assert!(view.products().is_empty());
}

/// Holds back one brand's listing until released.
struct GatedBrands {
    inner: InMemoryBrands,
    gated: &'static str,
    release: Arc<Notify>,
}

#[async_trait]
impl BrandsService for GatedBrands {
    async fn get_brand_products(&self, brand_slug: &str) -> Result<Vec<Product>, FetchError> {
        if brand_slug == self.gated {
            self.release.notified().await;
        }
        self.inner.get_brand_products(brand_slug).await
    }
}

#[tokio::test]
async fn stale_fetch_is_discarded() {
    let release = Arc::new(Notify::new());
    let service = GatedBrands {
        inner: brands(),
        gated: "acme",
        release: release.clone(),
    };
    let (view, mut nav, _head) = mount(Arc::new(service));

    nav.navigate("/brands/acme").unwrap();
    settle().await;
    nav.navigate("/brands/zenith").unwrap();
    settle().await;
    assert_eq!(ids(&view), vec!["9"]);

    release.notify_one();
    settle().await;
    assert_eq!(ids(&view), vec!["9"]);
}

#[tokio::test]
async fn watch_receives_filtered_lists() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    let mut rx = view.watch_filtered();

    nav.navigate("/brands/acme").unwrap();
    settle().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 2);

    nav.navigate("/brands/acme?subCatSlug=s2").unwrap();
    settle().await;

    assert!(rx.has_changed().unwrap());
    let latest = rx.borrow_and_update().clone();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id.as_str(), "2");
}

#[tokio::test]
async fn snapshot_serializes() {
    let (view, mut nav, _head) = mount(Arc::new(brands()));
    nav.navigate("/brands/acme?catSlug=c1").unwrap();
    settle().await;

    let json = serde_json::to_value(view.snapshot()).unwrap();
    assert_eq!(json["activeCategory"], "c1");
    assert_eq!(json["brand"]["metaTitle"], "Acme Parts");
    assert_eq!(json["categories"][0]["slug"], "c1");
}

#[tokio::test]
async fn builder_requires_collaborators() {
    let (_nav, routes) = RouteStreams::channel();
    let err = BrandView::builder(brand()).init(routes).unwrap_err();
    assert!(matches!(err, ViewError::MissingService));

    let (_nav, routes) = RouteStreams::channel();
    let err = BrandView::builder(brand())
        .service(Arc::new(brands()))
        .init(routes)
        .unwrap_err();
    assert!(matches!(err, ViewError::MissingSeoSink));
}

#[test]
fn init_outside_runtime_fails() {
    let (_nav, routes) = RouteStreams::channel();
    let head: Arc<dyn SeoSink> = Arc::new(DocumentHead::new());
    let err = BrandView::builder(brand())
        .service(Arc::new(brands()))
        .seo(head)
        .init(routes)
        .unwrap_err();
    assert!(matches!(err, ViewError::NoRuntime));
}

#[tokio::test]
async fn separate_views_do_not_share_state() {
    let service: Arc<dyn BrandsService> = Arc::new(brands());
    let (first, mut first_nav, _) = mount(service.clone());
    let (second, mut second_nav, _) = mount(service);

    first_nav.navigate("/brands/acme").unwrap();
    second_nav.navigate("/brands/zenith").unwrap();
    settle().await;
    first_nav.navigate("/brands/acme?partSlug=p1").unwrap();
    settle().await;

    assert_eq!(first.products().len(), 2);
    assert_eq!(ids(&first), vec!["1"]);
    assert_eq!(ids(&second), vec!["9"]);
    assert_ne!(first.view_id(), second.view_id());
}
