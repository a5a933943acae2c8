#![allow(dead_code)]

use axum::extract::ConnectInfo;
use shortly::domain::ShortCode;
use shortly::domain::generator::{CodeGenerator, RandomGenerator};
use shortly::domain::store::LinkStore;
use shortly::infrastructure::MemoryLinkStore;
use shortly::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::Layer;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Hands out the given codes in order, then repeats the last one.
pub struct FixedGenerator {
    codes: Vec<&'static str>,
    next: AtomicUsize,
}

impl FixedGenerator {
    pub fn new(codes: Vec<&'static str>) -> Self {
        Self {
            codes,
            next: AtomicUsize::new(0),
        }
    }
}

impl CodeGenerator for FixedGenerator {
    fn generate(&self) -> ShortCode {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        ShortCode::new(self.codes[i.min(self.codes.len() - 1)])
    }

    fn length(&self) -> usize {
        self.codes[0].len()
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    create_test_state_with(Box::new(RandomGenerator::default()), 8)
}

pub fn create_test_state_with(
    generator: Box<dyn CodeGenerator>,
    max_attempts: usize,
) -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new(generator, max_attempts));
    let state = AppState::new(store.clone(), TEST_BASE_URL);
    (state, store)
}

/// State whose links expire `ttl` after creation. A negative `ttl` yields
/// links that are already expired.
pub fn create_expiring_test_state(ttl: chrono::Duration) -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(
        MemoryLinkStore::new(Box::new(RandomGenerator::default()), 8).with_ttl(Some(ttl)),
    );
    let state = AppState::new(store.clone(), TEST_BASE_URL);
    (state, store)
}

/// Stores `url` directly and returns its code.
pub fn seed_link(store: &MemoryLinkStore, url: &str) -> String {
    store.insert(url).unwrap().identifier.into_inner()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
