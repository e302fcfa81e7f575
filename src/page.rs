//! Server-rendered page for the web front end.

use std::fmt::Write;

use crate::constants::messages;
use crate::services::processor::format_mean;
use crate::services::InsightReport;

/// What to show under the form.
pub enum PageOutcome<'a> {
    /// First visit, form only
    Blank,
    Warning(&'a str),
    Error(&'a str),
    Success(&'a InsightReport),
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(ticker: &str, outcome: PageOutcome<'_>) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<h1>Financial Agent: Stock Insights</h1>
<form method="post" action="/">
  <label for="ticker">Enter a stock ticker (e.g., NVDA):</label>
  <input id="ticker" name="ticker" type="text" value="{}">
  <button type="submit">Get Insights</button>
</form>
"#,
        escape_html(ticker)
    );

    match outcome {
        PageOutcome::Blank => {}
        PageOutcome::Warning(msg) => {
            let _ = writeln!(body, r#"<div class="banner warning">{}</div>"#, escape_html(msg));
        }
        PageOutcome::Error(msg) => {
            let _ = writeln!(body, r#"<div class="banner error">{}</div>"#, escape_html(msg));
        }
        PageOutcome::Success(report) => render_report(&mut body, report),
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Stock Insights</title>
<style>
  body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
  .banner {{ padding: 0.75rem; border-radius: 4px; margin: 1rem 0; }}
  .success {{ background: #e6f4ea; }}
  .warning {{ background: #fff4e5; }}
  .error {{ background: #fdecea; }}
  .insight {{ white-space: pre-wrap; }}
</style>
</head>
<body>
{}</body>
</html>
"#,
        body
    )
}

fn render_report(body: &mut String, report: &InsightReport) {
    let _ = writeln!(body, r#"<div class="banner success">{}</div>"#, messages::SUCCESS);

    if let Some(means) = &report.summary.recommendations {
        body.push_str("<h3>Analyst Recommendations</h3>\n<table id=\"recommendations\">\n");
        for (category, mean) in means.iter() {
            let _ = writeln!(body, "  <tr><th>{}</th><td>{}</td></tr>", category, format_mean(mean));
        }
        body.push_str("</table>\n");
    }

    if let Some(news) = &report.summary.news {
        body.push_str("<h3>Latest News</h3>\n<ul id=\"news\">\n");
        for item in news {
            let _ = writeln!(
                body,
                "  <li><strong>{}</strong><br>Publisher: {}</li>",
                escape_html(&item.title),
                escape_html(&item.publisher)
            );
        }
        body.push_str("</ul>\n");
    }

    let _ = writeln!(
        body,
        "<h3>Generated Insights</h3>\n<div class=\"insight\">{}</div>",
        escape_html(&report.insight)
    );
}
