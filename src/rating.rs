//! Star-rating acknowledgement
//!
//! Stateless: the rating is not stored anywhere, the user just gets a
//! thank-you message. Range is 1-5 by UI construction and is not
//! enforced here.

/// Returns the acknowledgement shown after rating, pluralized only
/// when more than one star was given.
pub fn acknowledgement(stars: u8) -> String {
    format!(
        "Thank you for rating {} star{}!",
        stars,
        if stars > 1 { "s" } else { "" }
    )
}
