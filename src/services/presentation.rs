use crate::models::{Book, BookCard};

/// How many description words a gallery caption shows.
const CAPTION_DESCRIPTION_WORDS: usize = 40;

/// Format one book as a display-ready gallery card.
pub fn format_card(book: &Book) -> BookCard {
    let caption = format!(
        "{} by {}: {}...",
        book.title,
        format_authors(&book.authors),
        truncate_description(&book.description)
    );

    BookCard {
        image: book.large_thumbnail.clone(),
        caption,
    }
}

fn truncate_description(description: &str) -> String {
    description
        .split_whitespace()
        .take(CAPTION_DESCRIPTION_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a `;`-delimited author list for a caption.
///
/// One author passes through unchanged; two become `"A and B."`; three or
/// more get an Oxford-style join, `"A, B, and C."`.
fn format_authors(authors: &str) -> String {
    let split: Vec<&str> = authors.split(';').collect();
    match split.as_slice() {
        [a, b] => format!("{} and {}.", a, b),
        [head @ .., last] if head.len() >= 2 => format!("{}, and {}.", head.join(", "), last),
        _ => authors.to_string(),
    }
}
