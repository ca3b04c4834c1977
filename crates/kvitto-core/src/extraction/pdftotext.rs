use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::error::KvittoError;
use crate::extraction::{CandidateGrid, FallbackTableSource, StatementDocument, WordToken};

// poppler exit codes: 1 = error opening the PDF, 3 = permission/encryption.
const EXIT_OPEN_ERROR: i32 = 1;
const EXIT_PERMISSION_ERROR: i32 = 3;

/// A statement PDF opened through poppler's pdftotext.
///
/// `-bbox-layout` supplies per-word geometry (x0/top offsets for the grid
/// reconstruction); `-layout` supplies whitespace-aligned text lines that
/// feed the stream-based fallback detector. Both runs happen once at open
/// time; page access afterwards is in-memory.
pub struct PdftotextDocument {
    words_by_page: Vec<Vec<WordToken>>,
    lines_by_page: Vec<Vec<String>>,
}

impl PdftotextDocument {
    /// Open a document from raw PDF bytes, decrypting with `password` if
    /// given. Fails with `DocumentAccess` for a wrong password or an
    /// unreadable file.
    pub fn open(pdf_bytes: &[u8], password: Option<&str>) -> Result<PdftotextDocument, KvittoError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| KvittoError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| KvittoError::Extraction(e.to_string()))?;

        Self::open_path(tmpfile.path(), password)
    }

    /// Open a document from a file on disk.
    pub fn open_path(path: &Path, password: Option<&str>) -> Result<PdftotextDocument, KvittoError> {
        let bbox_xml = run_pdftotext(path, password, &["-bbox-layout"])?;
        let words_by_page = parse_bbox_words(&bbox_xml);

        let layout_text = run_pdftotext(path, password, &["-layout"])?;
        let lines_by_page = split_layout_pages(&layout_text);

        Ok(PdftotextDocument {
            words_by_page,
            lines_by_page,
        })
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn page_lines(&self, page_index: usize) -> &[String] {
        self.lines_by_page
            .get(page_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl StatementDocument for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.words_by_page.len().max(self.lines_by_page.len())
    }

    fn words(&self, page_index: usize) -> Result<Vec<WordToken>, KvittoError> {
        let total = self.page_count();
        if page_index >= total {
            return Err(KvittoError::PageOutOfRange {
                index: page_index,
                total,
            });
        }
        Ok(self
            .words_by_page
            .get(page_index)
            .cloned()
            .unwrap_or_default())
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

impl FallbackTableSource for PdftotextDocument {
    fn detect(&self, page_index: usize) -> Result<Vec<CandidateGrid>, KvittoError> {
        Ok(super::stream::detect_tables(self.page_lines(page_index)))
    }
}

fn run_pdftotext(path: &Path, password: Option<&str>, flags: &[&str]) -> Result<String, KvittoError> {
    let mut cmd = Command::new("pdftotext");
    cmd.args(flags);
    if let Some(pw) = password {
        cmd.arg("-upw").arg(pw);
    }
    cmd.arg(path).arg("-"); // output to stdout

    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KvittoError::PdftotextNotFound
        } else {
            KvittoError::Extraction(format!("pdftotext failed: {}", e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(match code {
            EXIT_PERMISSION_ERROR => KvittoError::DocumentAccess(
                "document is encrypted and the password is wrong or missing".into(),
            ),
            EXIT_OPEN_ERROR => {
                KvittoError::DocumentAccess(format!("unreadable or corrupt PDF: {}", stderr.trim()))
            }
            _ => KvittoError::PdftotextFailed { code, stderr },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Pull word tokens out of `pdftotext -bbox-layout` XML, grouped by page.
///
/// The XML is line-oriented and flat enough that attribute scanning beats a
/// full parser here. xMin becomes the token's x0, yMin its top.
fn parse_bbox_words(xml: &str) -> Vec<Vec<WordToken>> {
    let mut pages: Vec<Vec<WordToken>> = Vec::new();
    let mut current_page: Option<usize> = None;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            let number = match parse_attr_usize(line, "number") {
                Some(n) if n > 0 => n,
                _ => pages.len() + 1,
            };
            if number > pages.len() {
                pages.resize(number, Vec::new());
            }
            current_page = Some(number - 1);
            continue;
        }

        if line.starts_with("<word ") {
            let Some(page) = current_page else { continue };
            let (Some(x0), Some(top)) = (
                parse_attr_f32(line, "xMin"),
                parse_attr_f32(line, "yMin"),
            ) else {
                continue;
            };
            if let Some(raw_text) = parse_word_text(line) {
                let text = decode_xml_entities(&raw_text).trim().to_string();
                if !text.is_empty() {
                    pages[page].push(WordToken { text, x0, top });
                }
            }
        }
    }

    pages
}

/// Split `-layout` output into per-page line lists. pdftotext separates
/// pages with form feeds and leaves a trailing one, producing an empty
/// final chunk that is not a page.
fn split_layout_pages(text: &str) -> Vec<Vec<String>> {
    let mut pages: Vec<Vec<String>> = text
        .split('\x0c')
        .map(|page_text| page_text.lines().map(str::to_string).collect())
        .collect();

    if pages.last().is_some_and(|lines| {
        lines.iter().all(|l| l.trim().is_empty())
    }) && pages.len() > 1
    {
        pages.pop();
    }

    pages
}

fn parse_attr_usize(tag: &str, name: &str) -> Option<usize> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
