//! Stroke icon artwork on a 24x24 grid.

use super::links::Icon;

impl Icon {
    /// Inner SVG markup for the glyph
    pub fn svg_body(&self) -> &'static str {
        match self {
            Icon::Code => concat!(
                r#"<polyline points="16 18 22 12 16 6"/>"#,
                r#"<polyline points="8 6 2 12 8 18"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Instagram => concat!(
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
                r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
                r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            ),
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-8-2"/>"#,
            ),
            Icon::Discord => concat!(
                r#"<path d="M8.5 17c-1 1.5-2.5 2-2.5 2s-3-1-3.5-6.5C2.5 8 5 5 5 5s2-1 4-1l.5 1h5l.5-1c2 0 4 1 4 1s2.5 3 2.5 7.5C21 18 18 19 18 19s-1.5-.5-2.5-2"/>"#,
                r#"<circle cx="9" cy="12" r="1"/>"#,
                r#"<circle cx="15" cy="12" r="1"/>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Icon::Sun => concat!(
                r#"<circle cx="12" cy="12" r="4"/>"#,
                r#"<path d="M12 2v2"/><path d="M12 20v2"/>"#,
                r#"<path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/>"#,
                r#"<path d="M2 12h2"/><path d="M20 12h2"/>"#,
                r#"<path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            ),
            Icon::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        }
    }

    /// Complete `<svg>` element with the given class
    pub fn svg(&self, class: &str) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" "#,
                r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" "#,
                r#"stroke-linejoin="round" class="{}" aria-hidden="true" data-icon="{}">{}</svg>"#,
            ),
            class,
            self.name(),
            self.svg_body()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_wraps_body() {
        let svg = Icon::Moon.svg("h-5 w-5");
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"class="h-5 w-5""#));
        assert!(svg.contains(r#"data-icon="moon""#));
        assert!(svg.ends_with("Z\"/></svg>"));
    }
}
