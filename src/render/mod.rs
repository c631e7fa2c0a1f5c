//! HTML fragment rendering for the public site.
//!
//! Every user-supplied field is escaped before it reaches markup; the only
//! raw injection is trusted rich-text post content in the single-post body.
//! Container markup and placeholder copy follow the public pages' contract.

use crate::models::{Merchant, Post};
use crate::text;

/// Excerpt length for blog list cards.
pub const BLOG_EXCERPT_CHARS: usize = 120;
/// Excerpt length for home carousel cards.
pub const CAROUSEL_EXCERPT_CHARS: usize = 100;

pub const NO_MERCHANTS: &str =
    "<p class=\"text-center\">No merchants are available at this time. Please check back later.</p>";
pub const NO_POSTS: &str =
    "<p class=\"lead text-center\">No blog posts found. Check back soon!</p>";
pub const NO_POSTS_CAROUSEL: &str =
    "<p class=\"lead text-center col-12\">No blog posts found. Check back soon!</p>";
pub const POST_MISSING_SLUG: &str =
    "<p class=\"lead text-center\">Post not found. Please check the URL and try again.</p>";
pub const POST_NOT_FOUND: &str =
    "<p class=\"lead text-center\">Post not found or is not available.</p>";

pub const MERCHANTS_LOAD_ERROR: &str = "<p class=\"text-center text-danger\">Could not load merchants. Please check your internet connection and try again.</p>";
pub const POSTS_LOAD_ERROR: &str =
    "<p class=\"lead text-center text-danger\">Could not load posts. Please try again later.</p>";
pub const CAROUSEL_LOAD_ERROR: &str = "<p class=\"lead text-center text-danger col-12\">Could not load posts. Please try again later.</p>";
pub const POST_LOAD_ERROR: &str =
    "<p class=\"lead text-center text-danger\">Could not load post. Please try again later.</p>";

/// Escape a string for use in HTML text or attribute context.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Render the merchant directory. Callers pass only publicly visible
/// (enabled) merchants; an empty slice renders the placeholder.
pub fn merchant_list(merchants: &[Merchant]) -> String {
    if merchants.is_empty() {
        return NO_MERCHANTS.to_string();
    }

    let mut html = String::new();
    for merchant in merchants {
        html.push_str(&format!(
            concat!(
                "<div class=\"merchant-item\" data-aos=\"fade-up\">",
                "<div class=\"merchant-info\">",
                "<h4>{name}</h4>",
                "<div class=\"verified-badge\"><i class=\"fas fa-check-circle\"></i> Verified</div>",
                "</div>",
                "<a href=\"{link}\" target=\"_blank\" class=\"btn btn-get-key\">Get Key</a>",
                "</div>"
            ),
            name = escape_html(&merchant.name),
            link = escape_html(&merchant.contact_link),
        ));
    }
    html
}

/// Render the blog list. Posts must already be sorted newest-first.
pub fn blog_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return NO_POSTS.to_string();
    }

    let mut html = String::new();
    for post in posts {
        let date = text::format_date_long(&post.created_at).unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"col-md-6 col-lg-4\" data-aos=\"fade-up\">{}</div>",
            blog_card(post, &date, BLOG_EXCERPT_CHARS)
        ));
    }
    html
}

/// Render the home carousel. Posts must already be sorted newest-first and
/// truncated to the carousel size.
pub fn home_carousel(posts: &[Post]) -> String {
    if posts.is_empty() {
        return NO_POSTS_CAROUSEL.to_string();
    }

    let mut html = String::new();
    for post in posts {
        let date = text::format_date_short(&post.created_at).unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"blog-carousel-item\" data-aos=\"fade-up\">{}</div>",
            blog_card(post, &date, CAROUSEL_EXCERPT_CHARS)
        ));
    }
    html
}

fn blog_card(post: &Post, date: &str, excerpt_chars: usize) -> String {
    format!(
        concat!(
            "<a href=\"post.html?slug={slug}\" class=\"text-decoration-none text-reset\">",
            "<div class=\"blog-card\">",
            "<div class=\"blog-card-img-wrapper\">",
            "<img src=\"{image}\" alt=\"{title}\" class=\"blog-card-img\">",
            "</div>",
            "<div class=\"blog-card-body\">",
            "<h4 class=\"blog-card-title\">{title}</h4>",
            "<p class=\"blog-card-meta\">By {author} \u{2022} {date}</p>",
            "<p class=\"blog-card-excerpt\">{excerpt}</p>",
            "<span class=\"blog-card-link\">Read More <i class=\"fas fa-arrow-right\"></i></span>",
            "</div>",
            "</div>",
            "</a>"
        ),
        slug = escape_html(&post.slug),
        image = escape_html(&post.image_url),
        title = escape_html(&post.title),
        author = escape_html(&post.author),
        date = escape_html(date),
        excerpt = escape_html(&text::excerpt(&post.content, excerpt_chars)),
    )
}

/// Render the single-post article body. The post's rich-text content is
/// injected verbatim: it originates from the admin editor and is trusted.
pub fn single_post(post: &Post) -> String {
    let date = text::format_date_long(&post.created_at).unwrap_or_default();
    format!(
        concat!(
            "<h1 class=\"post-title\">{title}</h1>",
            "<img src=\"{image}\" alt=\"{title}\" class=\"img-fluid rounded-3 mb-4 shadow\" ",
            "style=\"width: 100%; max-height: 500px; object-fit: cover;\">",
            "<p class=\"post-meta\">",
            "<span><i class=\"fas fa-user\"></i> By {author}</span>",
            "<span><i class=\"fas fa-calendar-alt\"></i> {date}</span>",
            "</p>",
            "<div class=\"post-content\">{content}</div>"
        ),
        title = escape_html(&post.title),
        image = escape_html(&post.image_url),
        author = escape_html(&post.author),
        date = escape_html(&date),
        content = post.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;

    fn sample_post() -> Post {
        Post {
            id: "p1".to_string(),
            title: "Hello <World>".to_string(),
            slug: "hello-world".to_string(),
            content: "<p>Some <b>rich</b> content</p>".to_string(),
            author: "Ada".to_string(),
            image_url: "https://example.com/a.png".to_string(),
            status: PostStatus::Published,
            created_at: "2026-07-04T12:00:00+00:00".to_string(),
            updated_at: "2026-07-04T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_merchant_list_escapes_fields() {
        let merchants = vec![Merchant {
            id: "m1".to_string(),
            name: "<b>Sneaky</b>".to_string(),
            contact_link: "https://example.com/?a=1&b=2".to_string(),
            is_enabled: true,
        }];

        let html = merchant_list(&merchants);
        assert!(html.contains("&lt;b&gt;Sneaky&lt;/b&gt;"));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(!html.contains("<b>Sneaky</b>"));
    }

    #[test]
    fn test_merchant_list_empty_placeholder() {
        assert_eq!(merchant_list(&[]), NO_MERCHANTS);
    }

    #[test]
    fn test_blog_list_card_contents() {
        let html = blog_list(&[sample_post()]);
        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("By Ada \u{2022} July 4, 2026"));
        assert!(html.contains("Some rich content..."));
        assert!(html.contains("post.html?slug=hello-world"));
    }

    #[test]
    fn test_blog_list_empty_placeholder() {
        assert_eq!(blog_list(&[]), NO_POSTS);
        assert_eq!(home_carousel(&[]), NO_POSTS_CAROUSEL);
    }

    #[test]
    fn test_single_post_injects_content_verbatim() {
        let html = single_post(&sample_post());
        // Title is escaped, content is not
        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("<p>Some <b>rich</b> content</p>"));
        assert!(html.contains("July 4, 2026"));
    }
}
