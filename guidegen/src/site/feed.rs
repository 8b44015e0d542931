//! RSS and JSON Feed output for the published guide set.

use color_eyre::eyre::Result;
use guidegen_core::{config::GuidesConfig, model::Guide};
use html_escape::encode_text;
use jiff::{civil::Date, fmt::rfc2822, tz::TimeZone};
use serde_json::{Value, json};

pub const RSS_FILENAME: &str = "rss.xml";
pub const JSON_FEED_FILENAME: &str = "feed.json";

/// Midnight UTC on the publication date, RFC 2822 formatted for RSS.
fn rss_date(date: Date) -> Result<String> {
  let zoned = date.to_zoned(TimeZone::UTC)?;
  Ok(rfc2822::to_string(&zoned)?)
}

/// The RSS 2.0 feed document. Draft guides carry no publication date and
/// are left out.
pub fn rss_feed(config: &GuidesConfig, guides: &[Guide]) -> Result<String> {
  let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
  xml.push_str("<rss version=\"2.0\">\n<channel>\n");
  xml.push_str(&format!("<title>{}</title>\n", encode_text(&config.title)));
  xml.push_str(&format!(
    "<link>{}</link>\n",
    encode_text(&config.home_page_url)
  ));
  xml.push_str(&format!(
    "<description>RSS feed for {}</description>\n",
    encode_text(&config.title)
  ));
  xml.push_str("<language>en</language>\n");

  for guide in guides {
    let Some(date) = guide.publication_date else {
      continue;
    };
    xml.push_str("<item>\n");
    xml.push_str(&format!(
      "<guid>{}</guid>\n",
      encode_text(&guide.slug)
    ));
    xml.push_str(&format!(
      "<title>{}</title>\n",
      encode_text(&guide.title)
    ));
    xml.push_str(&format!(
      "<description>{}</description>\n",
      encode_text(&guide.intro)
    ));
    xml.push_str(&format!("<pubDate>{}</pubDate>\n", rss_date(date)?));
    xml.push_str(&format!(
      "<link>{}{}</link>\n",
      encode_text(&config.home_page_url),
      encode_text(&guide.slug)
    ));
    for author in &guide.authors {
      xml.push_str(&format!("<author>{}</author>\n", encode_text(author)));
    }
    for tag in guide.tags() {
      xml.push_str(&format!(
        "<category>{}</category>\n",
        encode_text(&tag)
      ));
    }
    xml.push_str("</item>\n");
  }

  xml.push_str("</channel>\n</rss>\n");
  Ok(xml)
}

/// The JSON Feed 1.1 document.
pub fn json_feed(config: &GuidesConfig, guides: &[Guide]) -> Result<String> {
  let items: Vec<Value> = guides
    .iter()
    .filter_map(|guide| {
      let date = guide.publication_date?;
      Some(json!({
        "id": guide.slug,
        "url": format!("{}{}", config.home_page_url, guide.slug),
        "title": guide.title,
        "content_text": guide.intro,
        "date_published": format!("{date}T00:00:00Z"),
        "language": "en",
        "authors": guide.authors.iter()
          .map(|name| json!({ "name": name }))
          .collect::<Vec<Value>>(),
        "tags": guide.tags(),
      }))
    })
    .collect();

  let feed = json!({
    "version": "https://jsonfeed.org/version/1.1",
    "title": config.title,
    "home_page_url": config.home_page_url,
    "feed_url": format!("{}{JSON_FEED_FILENAME}", config.home_page_url),
    "items": items,
  });
  Ok(serde_json::to_string_pretty(&feed)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn guide() -> Guide {
    Guide {
      slug: "hello-world".to_owned(),
      title: "Hello <World>".to_owned(),
      intro: "Learn things".to_owned(),
      authors: vec!["Sergio".to_owned()],
      publication_date: Some(Date::constant(2024, 4, 2)),
      ..Guide::default()
    }
  }

  #[test]
  fn rss_escapes_markup_and_formats_dates() {
    let xml =
      rss_feed(&GuidesConfig::default(), &[guide()]).expect("feed");
    assert!(xml.contains("<title>Hello &lt;World&gt;</title>"));
    assert!(xml.contains("<guid>hello-world</guid>"));
    assert!(xml.contains("Apr 2024 00:00:00 +0000</pubDate>"));
  }

  #[test]
  fn drafts_are_left_out() {
    let mut draft = guide();
    draft.publication_date = None;
    let xml = rss_feed(&GuidesConfig::default(), &[draft]).expect("feed");
    assert!(!xml.contains("<item>"));
  }

  #[test]
  fn json_feed_is_version_1_1() {
    let feed =
      json_feed(&GuidesConfig::default(), &[guide()]).expect("feed");
    let value: Value = serde_json::from_str(&feed).expect("json");
    assert_eq!(
      value["version"],
      "https://jsonfeed.org/version/1.1"
    );
    assert_eq!(value["items"][0]["id"], "hello-world");
    assert_eq!(value["items"][0]["date_published"], "2024-04-02T00:00:00Z");
    assert_eq!(value["items"][0]["authors"][0]["name"], "Sergio");
  }
}
