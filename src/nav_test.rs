#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn browser_navigator_is_noop_but_callable() {
    let nav = BrowserNavigator::new(SiteConfig::default());
    nav.navigate(Destination::Landing);
    nav.navigate(Destination::Dashboard);
    nav.navigate(Destination::History);
}

#[test]
fn browser_navigator_works_behind_trait_object() {
    let nav: std::sync::Arc<dyn Navigator> = std::sync::Arc::new(BrowserNavigator::new(SiteConfig::default()));
    nav.navigate(Destination::History);
}
