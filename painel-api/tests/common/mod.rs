#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::task::Poll;

use futures::future::poll_fn;

use painel_api::{ApiClient, ApiConfig, HttpRequest, HttpResponse, Transport, TransportError};

pub const BASE_URL: &str = "http://painel.test";

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR")))
        .expect("Nao foi possivel ler a fixture")
}

/// In-memory transport answering by request path. Every `get` yields to the
/// executor once before answering, so requests joined together overlap and
/// show up in `peak_in_flight`.
#[derive(Default)]
pub struct StubTransport {
    routes: HashMap<String, Result<HttpResponse, TransportError>>,
    requests: RefCell<Vec<HttpRequest>>,
    in_flight: Cell<usize>,
    peak_in_flight: Cell<usize>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, path: &str, body: &str) -> Self {
        self.status(path, 200, body)
    }

    pub fn fixture(self, path: &str, name: &str) -> Self {
        let body = fixture(name);
        self.json(path, &body)
    }

    pub fn status(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, path: &str, err: TransportError) -> Self {
        self.routes.insert(path.to_string(), Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Most requests that were waiting for an answer at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.get()
    }
}

async fn yield_once() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

impl Transport for StubTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let in_flight = self.in_flight.get() + 1;
        self.in_flight.set(in_flight);
        self.peak_in_flight
            .set(self.peak_in_flight.get().max(in_flight));

        yield_once().await;
        self.in_flight.set(self.in_flight.get() - 1);

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();

        self.routes.get(&path).cloned().unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            })
        })
    }
}

pub fn client(transport: StubTransport) -> ApiClient<StubTransport> {
    ApiClient::with_transport(ApiConfig::from_values(Some(BASE_URL), None), transport)
}
