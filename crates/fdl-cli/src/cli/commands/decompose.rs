//! `fdl decompose <uri>`: print legacy path parts.

use fdl_core::Router;

pub fn run_decompose(router: &Router, uri: &str) {
    let parts = router.decompose_path(uri);
    if parts.is_empty() {
        eprintln!(
            "{uri} is not a {}://<client>/<plugin>/<payload> link",
            router.scheme()
        );
        return;
    }
    for part in parts {
        println!("{part}");
    }
}
