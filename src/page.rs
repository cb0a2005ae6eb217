//! HTML rendering of the single upload page.
//!
//! The page has a title, an upload form, two result columns and a static
//! sidebar. Every piece of text that comes from the uploaded document is
//! escaped before it is written.

use std::fmt::{self, Write as _};

use crate::{MetadataReport, PageState};

pub const PAGE_TITLE: &str = "PDF Metadata Analyzer";
pub const HEADING: &str = "AI-Powered PDF Metadata Analyzer";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 18rem; padding: 1rem 1.5rem; background: #f0f2f6; min-height: 100vh; }
main { flex: 1; padding: 1rem 2rem; }
.columns { display: flex; gap: 2rem; }
.columns > section { flex: 1; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.3rem 0.6rem; text-align: left; }
.badge { padding: 0.4rem 0.8rem; margin: 0.3rem 0; border-radius: 0.3rem; }
.pass { background: #dff0d8; }
.fail { background: #fcf8e3; }
.error { background: #f8d7da; padding: 0.6rem 1rem; border-radius: 0.3rem; }
.metric { font-size: 2rem; }
"#;

const ABOUT: &str = r#"<h2>About</h2>
<p>This tool uses AI and machine learning techniques to:</p>
<ul>
<li>Extract metadata from PDF files</li>
<li>Validate metadata completeness</li>
<li>Analyze metadata quality</li>
<li>Provide recommendations for improvement</li>
</ul>
<p>Upload a PDF file to get started!</p>"#;

/// Escape text for use inside HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the full page for `state`.
pub fn render_page(state: &PageState) -> String {
    let mut html = String::with_capacity(4096);
    // Writing into a `String` cannot fail.
    let _ = write_page(&mut html, state);
    html
}

fn write_page(html: &mut String, state: &PageState) -> fmt::Result {
    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <aside>{ABOUT}</aside>\n<main>\n<h1>{HEADING}</h1>\n"
    )?;
    html.push_str(UPLOAD_FORM);

    match state {
        PageState::Empty => {}
        PageState::Failed { message } => write!(
            html,
            "<div class=\"columns\">\n<section>\n<h3>Extracted Metadata</h3>\n\
             <div class=\"error\" role=\"alert\">Error processing PDF: {}</div>\n\
             </section>\n<section>\n<h3>Metadata Analysis</h3>\n</section>\n</div>\n",
            escape_html(message)
        )?,
        PageState::Populated(report) => write_columns(html, report)?,
    }

    html.push_str("</main>\n</body>\n</html>\n");
    Ok(())
}

const UPLOAD_FORM: &str = r#"<form method="post" action="/" enctype="multipart/form-data">
<label for="file">Upload a PDF file</label>
<input type="file" id="file" name="file" accept="application/pdf,.pdf" required>
<button type="submit">Analyze</button>
</form>
"#;

fn write_columns(html: &mut String, report: &MetadataReport) -> fmt::Result {
    html.push_str("<div class=\"columns\">\n<section>\n<h3>Extracted Metadata</h3>\n");
    html.push_str("<table>\n<thead><tr><th>Property</th><th>Value</th></tr></thead>\n<tbody>\n");
    for (property, value) in report.metadata.iter() {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(property),
            escape_html(&value.to_string())
        )?;
    }
    html.push_str("</tbody>\n</table>\n</section>\n");

    html.push_str("<section>\n<h3>Metadata Analysis</h3>\n");
    for check in report.analysis.checks() {
        let key = escape_html(&check.key());
        if check.passed {
            writeln!(html, "<div class=\"badge pass\">✓ {key}</div>")?;
        } else {
            writeln!(html, "<div class=\"badge fail\">⚠ {key} - Missing or Invalid</div>")?;
        }
    }
    writeln!(
        html,
        "<div class=\"metric\"><small>Metadata Completeness Score</small><br>{}</div>",
        report.formatted_score()
    )?;

    html.push_str("<h3>Recommendations</h3>\n");
    if report.is_complete() {
        html.push_str("<p>✓ All metadata fields are complete and valid!</p>\n");
    } else {
        html.push_str("<p>Consider adding or fixing the following metadata:</p>\n<ul>\n");
        for field in &report.recommendations {
            writeln!(html, "<li>{}</li>", escape_html(field))?;
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n</div>\n");
    Ok(())
}
