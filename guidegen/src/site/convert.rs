//! Asciidoc to HTML conversion behind a trait. Rendering markup is out of
//! scope for the engine; the default implementation shells out to an
//! `asciidoctor` executable.

use std::{
  io::Write as _,
  path::Path,
  process::{Command, Stdio},
};

use color_eyre::eyre::{Context, Result, bail};

/// Converts one substituted Asciidoc document into HTML. `source_dir` is
/// exposed to the document as the `sourcedir` attribute so include
/// directives resolve against the generated projects.
pub trait AsciidocConverter {
  fn convert(&self, asciidoc: &str, source_dir: &Path) -> Result<String>;
}

/// Default converter: an `asciidoctor` subprocess reading stdin and writing
/// stdout, configured like the original site build (book doctype, left
/// table of contents, no footer).
pub struct AsciidoctorProcess {
  executable: String,
}

impl Default for AsciidoctorProcess {
  fn default() -> Self {
    Self {
      executable: "asciidoctor".to_owned(),
    }
  }
}

impl AsciidocConverter for AsciidoctorProcess {
  fn convert(&self, asciidoc: &str, source_dir: &Path) -> Result<String> {
    let mut child = Command::new(&self.executable)
      .args([
        "--safe-mode",
        "unsafe",
        "--doctype",
        "book",
        "-a",
        "toc=left",
        "-a",
        "toclevels=1",
        "-a",
        "sectnums",
        "-a",
        "idprefix=",
        "-a",
        "idseparator=-",
        "-a",
        "icons=font",
        "-a",
        "imagesdir=images",
        "-a",
        "nofooter",
        "-a",
        "source-highlighter=coderay",
        "-a",
      ])
      .arg(format!("sourcedir={}", source_dir.display()))
      .args(["-o", "-", "-"])
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .wrap_err_with(|| format!("Failed to run '{}'", self.executable))?;

    if let Some(stdin) = child.stdin.as_mut() {
      stdin
        .write_all(asciidoc.as_bytes())
        .wrap_err("Failed to feed asciidoc to the converter")?;
    }
    let output = child
      .wait_with_output()
      .wrap_err("Failed to wait for the converter")?;
    if !output.status.success() {
      bail!(
        "'{}' failed with {}: {}",
        self.executable,
        output.status,
        String::from_utf8_lossy(&output.stderr)
      );
    }
    String::from_utf8(output.stdout)
      .wrap_err("Converter produced non-UTF-8 output")
  }
}
