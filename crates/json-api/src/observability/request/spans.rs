//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: &'static str,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);

    RequestSpanName {
        route,
        span_name: format!("{method} {route}"),
    }
}

/// Collapse a request path onto the route it matches so ids never become labels.
fn route_template(path: &str) -> &'static str {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => "/",
        ["cart", _] => "/cart/{id}",
        ["rename", _, _] => "/rename/{from}/{to}",
        ["add", _, _, _] => "/add/{id}/{sku}/{qty}",
        ["update", _, _, _] => "/update/{id}/{sku}/{qty}",
        ["shipping", _] => "/shipping/{id}",
        ["health"] => "/health",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => "/{unmatched}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_routes_hide_identifiers() {
        assert_eq!(route_template("/cart/abc-123"), "/cart/{id}");
        assert_eq!(route_template("/rename/a/b"), "/rename/{from}/{to}");
        assert_eq!(route_template("/add/a/TEE1/2"), "/add/{id}/{sku}/{qty}");
        assert_eq!(route_template("/update/a/TEE1/0"), "/update/{id}/{sku}/{qty}");
        assert_eq!(route_template("/shipping/a/"), "/shipping/{id}");
    }

    #[test]
    fn static_routes_are_kept() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/health"), "/health");
        assert_eq!(route_template("/docs/index.css"), "/docs");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        assert_eq!(route_template("/cart/a/extra"), "/{unmatched}");
        assert_eq!(route_template("/wp-admin"), "/{unmatched}");
    }

    #[test]
    fn span_name_joins_method_and_route() {
        let names = request_span_name("GET", "/cart/xyz");

        assert_eq!(names.span_name, "GET /cart/{id}");
        assert_eq!(names.route, "/cart/{id}");
    }
}
