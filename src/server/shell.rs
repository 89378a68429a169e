//! Static HTML rendering of the page
//!
//! Served when the browser bundle has not been built, and written by
//! `linkmee render`. Everything is already at rest; no script runs.

use std::fmt::Write;

use crate::content::Icon;
use crate::page::{LinkCardView, PageView, AVATAR_KEYFRAMES};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Escape text for HTML element content and double-quoted attributes
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

/// Full HTML document for a rendered page
pub fn render_document(view: &PageView) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let backdrop = &view.profile.avatar.backdrop;

    let _ = write!(
        html,
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\" class=\"{theme}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<meta name=\"description\" content=\"{description}\">\n",
            "<script src=\"{tailwind}\"></script>\n",
            "<style>{keyframes}</style>\n",
            "</head>\n",
            "<body>\n",
        ),
        lang = escape_html(view.meta.lang),
        theme = view.theme,
        title = escape_html(view.meta.title),
        description = escape_html(view.meta.description),
        tailwind = TAILWIND_CDN,
        keyframes = backdrop.keyframes_css(AVATAR_KEYFRAMES),
    );

    let _ = writeln!(html, "<div class=\"{}\">", view.root_class);

    // Header
    let toggle = &view.header.toggle;
    let _ = writeln!(
        html,
        concat!(
            "<header class=\"w-full max-w-md flex justify-end mb-8 relative z-10\" style=\"{}\">",
            "<button type=\"button\" class=\"{}\" aria-label=\"{}\" disabled>{}</button>",
            "</header>",
        ),
        view.header.entrance.to.css(),
        toggle.class,
        toggle.label,
        toggle.icon.svg("h-5 w-5"),
    );

    // Profile
    let profile = &view.profile;
    let identity = &profile.identity;
    let _ = writeln!(
        html,
        concat!(
            "<section class=\"flex flex-col items-center mb-8 relative z-10\" style=\"{entrance}\">",
            "<div class=\"relative mb-4\">",
            "<div class=\"absolute -inset-1 rounded-full blur-md opacity-70\" style=\"{backdrop}\"></div>",
            "<div class=\"relative {frame}\">",
            "<img src=\"{src}\" alt=\"{alt}\" width=\"128\" height=\"128\" class=\"h-full w-full object-cover\">",
            "</div></div>",
            "<div class=\"text-center\" style=\"{identity}\">",
            "<h1 class=\"{name_class}\">{name}</h1>",
            "<span class=\"{role_class}\">{role}</span>",
            "<p class=\"{tagline_class}\">{tagline}</p>",
            "</div></section>",
        ),
        entrance = profile.entrance.to.css(),
        backdrop = backdrop.animation_css(AVATAR_KEYFRAMES),
        frame = profile.avatar.frame_class,
        src = escape_html(profile.avatar.src),
        alt = escape_html(profile.avatar.alt),
        identity = identity.entrance.to.css(),
        name_class = identity.name_class,
        name = escape_html(identity.name),
        role_class = identity.role_class,
        role = escape_html(identity.role),
        tagline_class = identity.tagline_class,
        tagline = escape_html(identity.tagline),
    );

    // Links
    let _ = writeln!(
        html,
        "<nav class=\"w-full max-w-md space-y-4 relative z-10\" style=\"{}\">",
        view.links.entrance.to.css()
    );
    for card in &view.links.cards {
        render_card(&mut html, card);
    }
    html.push_str("</nav>\n");

    // Footer
    let footer = &view.footer;
    let _ = writeln!(
        html,
        concat!(
            "<footer class=\"{}\" style=\"{}\">",
            "<p>{}</p><p class=\"mt-1 text-xs opacity-75\">{}</p>",
            "</footer>",
        ),
        footer.class,
        footer.entrance.to.css(),
        escape_html(&footer.copyright),
        escape_html(footer.edition),
    );

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, card: &LinkCardView) {
    let _ = writeln!(
        html,
        concat!(
            "<a href=\"{href}\" target=\"{target}\" rel=\"{rel}\" class=\"{surface}\" style=\"{entrance}\">",
            "<div class=\"h-1 w-full\" style=\"background:{accent}\"></div>",
            "<div class=\"p-4 flex items-center\">",
            "<div class=\"{badge_class}\" style=\"background:{accent}\">{icon}</div>",
            "<div class=\"ml-4 flex-1\">",
            "<h2 class=\"{title_class}\">{title}</h2>",
            "<p class=\"{description_class}\">{description}</p>",
            "</div>{chevron}</div></a>",
        ),
        href = escape_html(card.href),
        target = card.target,
        rel = card.rel,
        surface = card.surface_class,
        entrance = card.entrance.to.css(),
        accent = card.accent,
        badge_class = card.badge_class,
        icon = card.icon.svg("h-5 w-5"),
        title_class = card.title_class,
        title = escape_html(card.title),
        description_class = card.description_class,
        description = escape_html(card.description),
        chevron = Icon::ExternalLink.svg(&card.chevron_class),
    );
}
