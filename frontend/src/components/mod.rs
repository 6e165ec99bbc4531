pub mod brand_navigation;
pub mod dispatch_timer;
pub mod footer_accordion;
