//! Response headers added to every request.

use salvo::{
    handler,
    http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, HeaderName, HeaderValue},
    prelude::{Depot, FlowCtrl, Request, Response},
};

const TIMING_ALLOW_ORIGIN: &str = "timing-allow-origin";

/// Let browsers on any origin read responses and their resource timings.
#[handler]
pub(crate) async fn open_origin_headers(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let any = HeaderValue::from_static("*");

    let headers = res.headers_mut();

    headers.insert(HeaderName::from_static(TIMING_ALLOW_ORIGIN), any.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, any);

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use salvo::{Router, Service, test::TestClient};

    use super::*;

    #[handler]
    async fn ok(res: &mut Response) {
        res.render("fine");
    }

    #[tokio::test]
    async fn adds_open_origin_headers() {
        let service = Service::new(
            Router::new()
                .hoop(open_origin_headers)
                .push(Router::with_path("thing").get(ok)),
        );

        let response = TestClient::get("http://example.com/thing")
            .send(&service)
            .await;

        for name in ["timing-allow-origin", "access-control-allow-origin"] {
            let value = response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok());

            assert_eq!(value, Some("*"), "{name} should be open");
        }
    }
}
