use super::types::NewRsvp;

/// Demo RSVPs inserted into an empty store when the server runs with `--seed`.
pub fn seed_rsvps() -> Vec<NewRsvp> {
    vec![
        NewRsvp::new("John Doe", 2),
        NewRsvp::new("Jane Smith", 1),
        NewRsvp::new("Alex Johnson", 4),
        NewRsvp::new("Maria Garcia", 3),
        NewRsvp::new("Sam Lee", 0),
    ]
}
