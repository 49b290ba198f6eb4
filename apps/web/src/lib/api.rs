//! HTTP helpers for the dashboard's outbound requests. Feature clients use
//! these to share request setup and error mapping. Requests carry no
//! credentials, auth headers, or body.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use tracing::{Instrument, debug, info_span};
use user_directory::{FetchError, check_status, classify_transport_error};
use web_sys::{AbortController, AbortSignal};

/// Issues a GET and returns the body of a 2xx response as text.
///
/// With `timeout_ms` set the whole exchange, body included, is aborted after
/// that many milliseconds; without it the request waits for the transport
/// indefinitely.
pub async fn get_text(url: &str, timeout_ms: Option<u32>) -> Result<String, FetchError> {
    let span = info_span!("http.get", http.method = "GET", url = %url);

    async move {
        // Held until the body is read; dropping it cancels the timer.
        let deadline = Deadline::start(timeout_ms)?;

        let request = Request::get(url)
            .abort_signal(deadline.signal())
            .build()
            .map_err(|err| FetchError::Request(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| deadline.classify(&err))?;
        let status = response.status();
        debug!(status, "response received");

        check_status(status)?;

        response.text().await.map_err(|err| deadline.classify(&err))
    }
    .instrument(span)
    .await
}

/// Optional abort timer shared by the send and body-read steps.
struct Deadline {
    armed: Option<ArmedDeadline>,
}

struct ArmedDeadline {
    ms: u32,
    signal: AbortSignal,
    _timer: Timeout,
}

impl Deadline {
    fn start(timeout_ms: Option<u32>) -> Result<Self, FetchError> {
        let Some(ms) = timeout_ms else {
            return Ok(Self { armed: None });
        };

        let controller = AbortController::new()
            .map_err(|_| FetchError::Request("failed to initialize request timeout".to_string()))?;
        let signal = controller.signal();
        let timer = Timeout::new(ms, move || controller.abort());

        Ok(Self {
            armed: Some(ArmedDeadline {
                ms,
                signal,
                _timer: timer,
            }),
        })
    }

    fn signal(&self) -> Option<&AbortSignal> {
        self.armed.as_ref().map(|armed| &armed.signal)
    }

    fn classify(&self, err: &gloo_net::Error) -> FetchError {
        let (aborted, timeout_ms) = match &self.armed {
            Some(armed) => (armed.signal.aborted(), Some(armed.ms)),
            None => (false, None),
        };

        classify_transport_error(aborted, err.to_string(), timeout_ms)
    }
}
