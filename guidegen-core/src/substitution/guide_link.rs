use std::sync::LazyLock;

use regex::Regex;

use super::MacroSubstitution;
use crate::{
  error::Result, model::Guide, options::GuidesOption, scan,
};

static GUIDE_LINK: LazyLock<Regex> =
  LazyLock::new(|| scan::compile_or_never(r"guideLink:(.*?)\[(.*?)]"));

/// Rewrites `guideLink:slug[text]` cross-references into relative HTML
/// links: `link:slug.html[text]`.
pub struct GuideLinkSubstitution;

impl MacroSubstitution for GuideLinkSubstitution {
  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    _option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();
    for instance in scan::find_macro_instances(text, &GUIDE_LINK) {
      if let Some(captures) = GUIDE_LINK.captures(&instance) {
        let slug = captures[1].trim();
        let link_text = &captures[2];
        result =
          result.replace(&instance, &format!("link:{slug}.html[{link_text}]"));
      }
    }
    Ok(result)
  }
}
