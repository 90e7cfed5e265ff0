//! Plain-text response writer
//!
//! Every response of the API is a status code plus a plain-text body. The
//! body type logs when it is dropped before being written out, since by then
//! the status line has already gone to the client.

use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use http_body::{Body as HttpBody, Frame, SizeHint};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Write `body` verbatim with `status`.
pub fn respond(status: StatusCode, body: impl Into<String>) -> Response {
    let mut response = Response::new(Body::new(PlainTextBody::new(status, body.into())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    response
}

/// Write an error `message` followed by a newline.
pub fn respond_error(status: StatusCode, message: &str) -> Response {
    let mut response = respond(status, format!("{message}\n"));
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

/// Single-chunk body that reports if it never reached the wire
pub struct PlainTextBody {
    status: StatusCode,
    data: Option<Bytes>,
}

impl PlainTextBody {
    fn new(status: StatusCode, body: String) -> Self {
        let data = (!body.is_empty()).then(|| Bytes::from(body));
        Self { status, data }
    }
}

impl HttpBody for PlainTextBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(self.data.take().map(|data| Ok(Frame::data(data))))
    }

    fn is_end_stream(&self) -> bool {
        self.data.is_none()
    }

    fn size_hint(&self) -> SizeHint {
        let len = self.data.as_ref().map_or(0, |data| data.len() as u64);
        SizeHint::with_exact(len)
    }
}

impl Drop for PlainTextBody {
    fn drop(&mut self) {
        if let Some(data) = &self.data {
            tracing::debug!(
                status = self.status.as_u16(),
                bytes = data.len(),
                "Failed to write response body"
            );
        }
    }
}
