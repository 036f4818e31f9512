use std::collections::HashMap;

pub const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
pub const NAVIGATION_TEMPLATE: &str =
  include_str!("../templates/page/navigation.html");
pub const NAVIGATION_MACROS: &str =
  include_str!("../templates/page/macros.html");

pub const FRAMEWORKS_PAGE: &str = include_str!("../templates/frameworks.md");
pub const COLORS_PAGE: &str = include_str!("../templates/colors.md");

/// Every embedded template, keyed by the name it is registered under.
#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert("page.html", PAGE_TEMPLATE);
  templates.insert("page/navigation.html", NAVIGATION_TEMPLATE);
  templates.insert("page/macros.html", NAVIGATION_MACROS);
  templates.insert("frameworks.md", FRAMEWORKS_PAGE);
  templates.insert("colors.md", COLORS_PAGE);
  templates
}
