//! RSVP API operations.

use super::RsvpClient;
use crate::error::Result;
use rsvp_core::rsvp::{Rsvp, RsvpRequest};

impl RsvpClient {
    /// List all RSVPs.
    pub async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        let response = self.client.get(self.url("/rsvps")).send().await?;
        self.handle_response(response, "RSVPs").await
    }

    /// Get RSVP by ID.
    pub async fn get_rsvp(&self, id: i64) -> Result<Rsvp> {
        let response = self
            .client
            .get(self.url(&format!("/rsvps/{}", id)))
            .send()
            .await?;
        self.handle_response(response, format!("RSVP {id}")).await
    }

    /// Create a new RSVP.
    pub async fn create_rsvp(&self, guest_name: &str, total_attending: i32) -> Result<Rsvp> {
        let response = self
            .client
            .post(self.url("/rsvps"))
            .json(&RsvpRequest::new(guest_name, total_attending))
            .send()
            .await?;
        self.handle_response(response, "RSVP").await
    }

    /// Replace the fields of an existing RSVP.
    pub async fn update_rsvp(
        &self,
        id: i64,
        guest_name: &str,
        total_attending: i32,
    ) -> Result<Rsvp> {
        let response = self
            .client
            .put(self.url(&format!("/rsvps/{}", id)))
            .json(&RsvpRequest::new(guest_name, total_attending))
            .send()
            .await?;
        self.handle_response(response, format!("RSVP {id}")).await
    }

    /// Delete RSVP by ID.
    pub async fn delete_rsvp(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/rsvps/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response, format!("RSVP {id}"))
            .await
    }
}
