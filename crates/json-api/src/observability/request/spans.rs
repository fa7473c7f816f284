//! HTTP span helpers.

use uuid::Uuid;

/// Collapse identifier segments so that every request for the same route
/// shares one metrics label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    path.trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .fold(String::new(), |mut route, segment| {
            route.push('/');
            route.push_str(segment);
            route
        })
}
