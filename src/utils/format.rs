//! Terminal output formatting
//!
//! Small pure helpers the CLI commands use to lay out catalog records:
//! list rows, star-rating bars, wrapped prose, and the pagination footer.

use unicode_width::UnicodeWidthStr;

use crate::catalog::types::Movie;
use crate::pagination::page_window;

/// Column width of the title cell in list rows.
const TITLE_WIDTH: usize = 44;

/// Wrap width for overviews, biographies and review bodies.
pub const PROSE_WIDTH: usize = 78;

/// Render a 0-10 vote average as a five-star bar, two points per star.
pub fn star_bar(vote_average: f64) -> String {
    let filled = ((vote_average / 2.0).round() as i64).clamp(0, 5) as usize;
    let mut bar = "★".repeat(filled);
    bar.push_str(&"☆".repeat(5 - filled));
    bar
}

/// One listing row: favorite marker, id, title with year, rating.
pub fn movie_row(movie: &Movie, favorite: bool) -> String {
    let marker = if favorite { "♥" } else { " " };
    let title = match movie.release_year() {
        Some(year) => format!("{} ({})", movie.title, year),
        None => movie.title.clone(),
    };
    let rating = match movie.vote_average {
        Some(avg) => format!("{} {:.1}", star_bar(avg), avg),
        None => String::new(),
    };
    format!(
        "{} {:>8}  {}  {}",
        marker,
        movie.id,
        pad_to_width(&title, TITLE_WIDTH),
        rating
    )
    .trim_end()
    .to_string()
}

/// Render a page of movies as rows, one per line.
pub fn movie_table(movies: &[Movie], favorites: &[String]) -> String {
    movies
        .iter()
        .map(|movie| {
            let favorite = favorites.iter().any(|f| f == &movie.id.to_string());
            movie_row(movie, favorite)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pagination footer built from the page window, e.g. `3 4 [5] 6 7 ... 10`.
/// Empty when there is at most one page.
pub fn pagination_footer(current_page: u32, total_pages: u32) -> String {
    let window = page_window(current_page, total_pages);
    if window.is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = window
        .pages
        .iter()
        .map(|&p| {
            if p == current_page {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();
    if window.show_trailing_ellipsis {
        parts.push("...".to_string());
    }
    if window.show_last_page_button {
        parts.push(total_pages.to_string());
    }
    format!("page {}", parts.join(" "))
}

/// Wrap prose to the display width, preserving paragraph breaks.
pub fn wrap_prose(text: &str) -> String {
    text.split("\n\n")
        .map(|paragraph| textwrap::fill(paragraph.trim(), PROSE_WIDTH))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Pad a string to a display width, truncating overlong values with `…`.
/// Widths are measured in terminal columns, not chars.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current <= width {
        let mut padded = s.to_string();
        padded.push_str(&" ".repeat(width - current));
        return padded;
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > width.saturating_sub(1) {
            break;
        }
        truncated.push(c);
        used += char_width;
    }
    truncated.push('…');
    let remaining = width.saturating_sub(truncated.width());
    truncated.push_str(&" ".repeat(remaining));
    truncated
}
