use std::collections::HashMap;

pub const GUIDE_TEMPLATE: &str = include_str!("../templates/guide.html");
pub const GUIDES_INDEX_TEMPLATE: &str =
  include_str!("../templates/guides.html");
pub const INDEX_ITEM_TEMPLATE: &str =
  include_str!("../templates/index-item.html");
pub const CONSOLE_TABS: &str = include_str!("../templates/consoleTabs.html");
pub const GRADLE_MAVEN_TABS: &str =
  include_str!("../templates/gradleMavenTabs.html");

#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert("guide.html", GUIDE_TEMPLATE);
  templates.insert("guides.html", GUIDES_INDEX_TEMPLATE);
  templates.insert("index-item.html", INDEX_ITEM_TEMPLATE);
  templates.insert("consoleTabs.html", CONSOLE_TABS);
  templates.insert("gradleMavenTabs.html", GRADLE_MAVEN_TABS);
  templates
}
