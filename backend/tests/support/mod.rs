//! Live HTTP servers for client integration tests.
//!
//! Each server binds `127.0.0.1:0`, runs one worker and counts every request
//! it receives so tests can prove that locally rejected calls never reach
//! the network.

use std::convert::Infallible;
use std::future::Future;
use std::net::TcpListener;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::body::{BodySize, MessageBody};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::rt::time::{Sleep, sleep};
use actix_web::web::Bytes;
use actix_web::{App, HttpResponse, HttpServer, web};
use url::Url;

use user_search::domain::{Gender, InMemoryUserSearch, UserRecord, UserRecords};
use user_search::inbound::http::search::search_users;
use user_search::inbound::http::state::HttpState;
use user_search::outbound::search_client::HttpUserSearchClient;

pub const SEARCH_PATH: &str = "/api/v1/users/search";

/// A running server plus its request counter.
pub struct TestServer {
    pub endpoint: Url,
    hits: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl TestServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self, token: &str) -> HttpUserSearchClient {
        self.client_with_timeout(token, Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, token: &str, timeout: Duration) -> HttpUserSearchClient {
        HttpUserSearchClient::new(self.endpoint.clone(), token, timeout).expect("client builds")
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn bind() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let endpoint = Url::parse(&format!("http://{addr}{SEARCH_PATH}")).expect("endpoint url");
    (listener, endpoint)
}

/// Serve the real search handler over `records`.
pub fn spawn_search_server(records: UserRecords) -> TestServer {
    let (listener, endpoint) = bind();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_for_server = Arc::clone(&hits);
    let state = web::Data::new(HttpState::new(Arc::new(InMemoryUserSearch::new(records))));

    let server = HttpServer::new(move || {
        let counter = Arc::clone(&hits_for_server);
        App::new()
            .app_data(state.clone())
            .wrap_fn(move |req, srv| {
                counter.fetch_add(1, Ordering::SeqCst);
                actix_web::dev::Service::call(srv, req)
            })
            .service(web::scope("/api/v1").service(search_users))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on test listener")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    TestServer {
        endpoint,
        hits,
        handle,
    }
}

/// Canned reply served for every request on the search path.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: &'static str,
    pub delay: Duration,
    /// Pause between sending the headers and the body.
    pub body_delay: Duration,
}

impl Canned {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
            body_delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stalled_body(mut self, delay: Duration) -> Self {
        self.body_delay = delay;
        self
    }
}

/// Streaming body that yields its single chunk only after a pause.
struct StalledBody {
    pause: Pin<Box<Sleep>>,
    chunk: Option<Bytes>,
}

impl MessageBody for StalledBody {
    type Error = Infallible;

    fn size(&self) -> BodySize {
        BodySize::Stream
    }

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Bytes, Self::Error>>> {
        let this = self.get_mut();
        match this.pause.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(()) => Poll::Ready(this.chunk.take().map(Ok)),
        }
    }
}

async fn canned_reply(
    canned: web::Data<Canned>,
    hits: web::Data<Arc<AtomicUsize>>,
) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    if !canned.delay.is_zero() {
        actix_web::rt::time::sleep(canned.delay).await;
    }
    let mut builder = HttpResponse::build(canned.status);
    builder.content_type("application/json");
    if canned.body_delay.is_zero() {
        builder.body(canned.body)
    } else {
        builder.body(StalledBody {
            pause: Box::pin(sleep(canned.body_delay)),
            chunk: Some(Bytes::from_static(canned.body.as_bytes())),
        })
    }
}

/// Serve `canned` regardless of the request.
pub fn spawn_canned_server(canned: Canned) -> TestServer {
    let (listener, endpoint) = bind();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = web::Data::new(Arc::clone(&hits));
    let canned = web::Data::new(canned);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(canned.clone())
            .app_data(counter.clone())
            .route(SEARCH_PATH, web::get().to(canned_reply))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on test listener")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    TestServer {
        endpoint,
        hits,
        handle,
    }
}

/// `count` synthetic records named `User{n} Example`, ids ascending.
pub fn numbered_records(count: i64) -> UserRecords {
    (0..count)
        .map(|id| {
            UserRecord::new(
                id,
                format!("User{id}"),
                "Example",
                20,
                "",
                Gender::Female,
            )
        })
        .collect()
}
