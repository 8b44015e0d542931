//! Guide page shell: splits the converted HTML into table-of-contents and
//! content, then splices both into the `guide.html` template.

const TOC_MARKER: &str = "<div id=\"toc\"";
const DIV_OPEN: &str = "<div";
const DIV_CLOSE: &str = "</div>";

/// The table-of-contents `<div>` and the document with it removed.
///
/// The `<div id="toc">` span is located by balanced `<div>`/`</div>`
/// scanning, so nested divs inside the TOC are kept with it. A document
/// without a TOC comes back unchanged with an empty TOC.
#[must_use]
pub fn extract_toc(html: &str) -> (String, String) {
  let Some(start) = html.find(TOC_MARKER) else {
    return (String::new(), html.to_owned());
  };

  let mut depth = 0usize;
  let mut position = start;
  while position < html.len() {
    let rest = &html[position..];
    let next_open = rest.find(DIV_OPEN);
    let next_close = rest.find(DIV_CLOSE);
    match (next_open, next_close) {
      (Some(open), Some(close)) if open < close => {
        depth += 1;
        position += open + DIV_OPEN.len();
      },
      (_, Some(close)) => {
        depth -= 1;
        position += close + DIV_CLOSE.len();
        if depth == 0 {
          let toc = html[start..position].to_owned();
          let mut content = String::with_capacity(html.len() - toc.len());
          content.push_str(&html[..start]);
          content.push_str(&html[position..]);
          return (toc, content);
        }
      },
      // Unbalanced markup; treat the whole document as content.
      _ => break,
    }
  }
  (String::new(), html.to_owned())
}

/// Renders the page shell for one guide option.
#[must_use]
pub fn render(template: &str, toc: &str, content: &str) -> String {
  template.replace("{toc}", toc).replace("{content}", content)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_toc_with_nested_divs() {
    let html = "<body><div id=\"toc\" class=\"toc\">\
                <div class=\"sect\">a</div></div><p>rest</p></body>";
    let (toc, content) = extract_toc(html);
    assert_eq!(
      toc,
      "<div id=\"toc\" class=\"toc\"><div class=\"sect\">a</div></div>"
    );
    assert_eq!(content, "<body><p>rest</p></body>");
  }

  #[test]
  fn document_without_toc_is_unchanged() {
    let (toc, content) = extract_toc("<p>no toc</p>");
    assert!(toc.is_empty());
    assert_eq!(content, "<p>no toc</p>");
  }

  #[test]
  fn unbalanced_markup_falls_back_to_content() {
    let html = "<div id=\"toc\"><div>never closed";
    let (toc, content) = extract_toc(html);
    assert!(toc.is_empty());
    assert_eq!(content, html);
  }

  #[test]
  fn render_splices_both_slots() {
    let out = render("[{toc}][{content}]", "T", "C");
    assert_eq!(out, "[T][C]");
  }
}
