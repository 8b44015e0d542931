//! Index and per-guide matrix pages.

use std::fmt::Write as _;

use guidegen_core::{
  model::Guide,
  options::guides_options,
  scan,
};
use html_escape::encode_text;

const CLOUD_INDEPENDENT: &str = "independent";

/// One index card per (language, build tool) rendering of a guide, from the
/// `index-item.html` template.
fn guide_cards(template: &str, guide: &Guide) -> String {
  let cloud = guide
    .cloud
    .map_or(CLOUD_INDEPENDENT.to_owned(), |cloud| {
      cloud.acronym().to_lowercase()
    });
  // The last declared category names the card.
  let (category_class, category_title) =
    guide.categories.last().map_or_else(
      || (String::new(), String::new()),
      |category| {
        (category.to_lowercase().replace(' ', "-"), category.to_lowercase())
      },
    );

  let mut cards = String::new();
  for &language in &guide.languages {
    for &build_tool in &guide.build_tools {
      let href = format!("{}-{build_tool}-{language}.html", guide.slug);
      cards.push_str(
        &template
          .replace("{cloud}", &cloud)
          .replace("{categoryClass}", &category_class)
          .replace("{categoryTitle}", &category_title)
          .replace("{build}", build_tool.name())
          .replace("{title}", &encode_text(&guide.title))
          .replace("{intro}", &encode_text(&guide.intro))
          .replace("{href}", &href),
      );
    }
  }
  cards
}

/// The site index page: every guide's cards spliced into the `guides.html`
/// template.
#[must_use]
pub fn render_index(
  index_template: &str,
  item_template: &str,
  guides: &[Guide],
) -> String {
  let content: String = guides
    .iter()
    .map(|guide| guide_cards(item_template, guide))
    .collect();
  index_template.replace("{content}", &content)
}

/// The per-guide matrix page: one link per rendered option.
#[must_use]
pub fn render_matrix(guide: &Guide) -> String {
  let mut html = String::from("<!DOCTYPE html><html><head></head><body>");
  let _ = write!(html, "<h1>{}</h1><ul>", encode_text(&guide.title));
  for option in guides_options(guide) {
    let href = format!("{}.html", scan::source_dir(&guide.slug, &option));
    let _ = write!(
      html,
      "<li><a href=\"{href}\">{} {}</a></li>",
      option.build_tool, option.language
    );
  }
  html.push_str("</ul></body></html>");
  html
}

#[cfg(test)]
mod tests {
  use super::*;
  use guidegen_core::model::{App, BuildTool, Cloud, Language};

  fn guide() -> Guide {
    Guide {
      slug: "hello-world".to_owned(),
      title: "Hello World".to_owned(),
      intro: "Learn things".to_owned(),
      categories: vec!["Getting Started".to_owned()],
      languages: vec![Language::Java],
      build_tools: vec![BuildTool::Gradle, BuildTool::Maven],
      apps: vec![App {
        name: "default".to_owned(),
        ..App::default()
      }],
      ..Guide::default()
    }
  }

  #[test]
  fn index_renders_one_card_per_option_pair() {
    let html = render_index(
      "{content}",
      "<a href=\"{href}\" data-cloud=\"{cloud}\" \
       class=\"{categoryClass}\">{title}</a>",
      &[guide()],
    );
    assert!(html.contains("href=\"hello-world-gradle-java.html\""));
    assert!(html.contains("href=\"hello-world-maven-java.html\""));
    assert!(html.contains("data-cloud=\"independent\""));
    assert!(html.contains("class=\"getting-started\""));
  }

  #[test]
  fn cloud_acronym_is_lowercased() {
    let mut guide = guide();
    guide.cloud = Some(Cloud::Oci);
    let html = render_index("{content}", "{cloud}", &[guide]);
    assert!(html.contains("oci"));
  }

  #[test]
  fn matrix_links_every_option() {
    let html = render_matrix(&guide());
    assert!(html.starts_with("<!DOCTYPE html><html><head></head><body>"));
    assert!(html.contains("<h1>Hello World</h1>"));
    assert!(html.contains(
      "<li><a href=\"hello-world-gradle-java.html\">gradle java</a></li>"
    ));
    assert!(html.contains(
      "<li><a href=\"hello-world-maven-java.html\">maven java</a></li>"
    ));
  }
}
