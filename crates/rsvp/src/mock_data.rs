use rsvp_core::rsvp::seed_rsvps;
use rsvp_core::storage::{Result, RsvpRepository};

/// Inserts the demo RSVPs when the store is empty.
///
/// Returns how many records were inserted; a store that already holds data
/// is left alone.
pub async fn seed_demo_data(repo: &dyn RsvpRepository) -> Result<usize> {
    if !repo.list_rsvps().await?.is_empty() {
        tracing::debug!("Store already has rsvps, skipping demo data");
        return Ok(0);
    }

    let demo = seed_rsvps();
    for rsvp in &demo {
        let created = repo.create_rsvp(rsvp).await?;
        tracing::debug!(rsvp_id = created.id, guest_name = %created.guest_name, "Seeded rsvp");
    }

    Ok(demo.len())
}
