/// Returns the cache key for a single RSVP.
pub fn rsvp_key(id: i64) -> String {
    format!("rsvp:{}", id)
}
