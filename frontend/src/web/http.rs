//! Browser transport.
//!
//! `web_sys::fetch` implementation of the core `HttpClient`. Every failure
//! before a response arrives (CORS, DNS, offline) is a `TransportError`.

use hackwell::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// `HttpClient` over the browser Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn js_error(context: &str, e: JsValue) -> TransportError {
    TransportError::new(format!("{context}: {e:?}"))
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = Headers::new().map_err(|e| js_error("failed to create headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("failed to set header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("failed to build request", e))?;

        let window =
            web_sys::window().ok_or_else(|| TransportError::new("window is not available"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch failed", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("unexpected fetch result", e))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| js_error("failed to read body", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("failed to read body", e))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
