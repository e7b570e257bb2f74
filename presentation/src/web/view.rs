//! HTML view rendering

use super::error::WebError;
use ask_domain::Answer;
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the question page.
///
/// Templates are compiled into the binary and parsed once; interpolated
/// values are HTML-escaped.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    tera: Tera,
}

#[derive(Serialize)]
struct IndexPage<'a> {
    question: &'a str,
    response: &'a str,
}

impl PageRenderer {
    pub fn new() -> Result<Self, WebError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        tera.autoescape_on(vec![".html"]);
        Ok(Self { tera })
    }

    /// Render the page; a missing answer or question renders as empty text.
    pub fn render(
        &self,
        answer: Option<&Answer>,
        question: Option<&str>,
    ) -> Result<String, WebError> {
        let page = IndexPage {
            question: question.unwrap_or_default(),
            response: answer.map(Answer::text).unwrap_or_default(),
        };
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_answer() {
        let html = PageRenderer::new().unwrap().render(None, None).unwrap();
        assert!(html.contains(r#"<pre id="response"></pre>"#));
        assert!(html.contains(r#"name="question" required></textarea>"#));
    }

    #[test]
    fn test_render_with_answer() {
        let answer = Answer::new("4");
        let html = PageRenderer::new()
            .unwrap()
            .render(Some(&answer), Some("What is 2+2?"))
            .unwrap();
        assert!(html.contains(r#"<pre id="response">4</pre>"#));
        assert!(html.contains("What is 2+2?</textarea>"));
    }

    #[test]
    fn test_render_escapes_html() {
        let answer = Answer::new("<script>alert(1)</script>");
        let html = PageRenderer::new()
            .unwrap()
            .render(Some(&answer), Some("<b>q</b>"))
            .unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;q"));
    }
}
