//! Shared fakes for behavior tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tickchart_core::{
    AlphaVantageClient, ApiKey, ChartData, ChartRenderer, FetchConfig, HttpClient, HttpError,
    HttpRequest, HttpResponse, RenderError, RenderHandle,
};

pub const HEADER: &str = "timestamp,open,high,low,close,volume";

/// Five daily rows, newest first as Alpha Vantage sends them.
pub const FIVE_DAYS: &str = "timestamp,open,high,low,close,volume
2024-01-05,15.0,15.5,14.5,15.2,500
2024-01-04,14.0,14.5,13.5,14.2,400
2024-01-03,13.0,13.5,12.5,13.2,300
2024-01-02,12.0,12.5,11.5,12.2,200
2024-01-01,11.0,11.5,10.5,11.2,100
";

/// Replays one canned result and records every request it sees.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn body(body: &str) -> Self {
        Self::respond(Ok(HttpResponse::ok(body)))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::respond(Ok(HttpResponse {
            status,
            body: String::from(body),
        }))
    }

    pub fn transport_error(message: &str) -> Self {
        Self::respond(Err(HttpError::new(message)))
    }

    fn respond(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// Keeps every chart it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub charts: RefCell<Vec<ChartData>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &ChartData) -> Result<RenderHandle, RenderError> {
        self.charts.borrow_mut().push(chart.clone());
        Ok(RenderHandle {
            path: None,
            opened: false,
        })
    }
}

pub fn client_with(http: Arc<RecordingHttpClient>) -> AlphaVantageClient {
    AlphaVantageClient::with_http_client(http, FetchConfig::new(ApiKey::new("test-key")))
}
