//! Like service: like-relationship invariants
//!
//! A like is unique per (user, vacation) pair and can only be held by a
//! non-admin user. Checks run in a fixed order, short-circuiting: vacation
//! exists, user exists, user is not an admin, no like exists yet.

use std::sync::Arc;

use tracing::info;

use crate::error::{BookingError, BookingResult};
use crate::models::Vacation;
use crate::storage::Storage;

/// Like business-rule layer over the storage collaborator
pub struct LikeService<S> {
    storage: Arc<S>,
}

impl<S: Storage> LikeService<S> {
    /// Create a new like service
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Record a like for a (user, vacation) pair
    ///
    /// Not idempotent: liking an already-liked vacation is a conflict.
    pub async fn add(&self, user_id: i32, vacation_id: i32) -> BookingResult<()> {
        if self
            .storage
            .get_vacation_by_id(vacation_id)
            .await?
            .is_none()
        {
            return Err(BookingError::NotFound("Vacation"));
        }
        let Some(user) = self.storage.get_user_by_id(user_id).await? else {
            return Err(BookingError::NotFound("User"));
        };
        if user.role.is_admin() {
            return Err(BookingError::Unauthorized("Admins cannot like vacations"));
        }
        if self.storage.like_exists(user_id, vacation_id).await? {
            return Err(BookingError::Conflict(
                "User has already liked this vacation",
            ));
        }

        self.storage.add_like(user_id, vacation_id).await?;
        info!("User {} liked vacation {}", user_id, vacation_id);
        Ok(())
    }

    /// Remove an existing like for a (user, vacation) pair
    pub async fn remove(&self, user_id: i32, vacation_id: i32) -> BookingResult<()> {
        if !self.storage.like_exists(user_id, vacation_id).await? {
            return Err(BookingError::NotFound("Like"));
        }
        self.storage.remove_like(user_id, vacation_id).await?;
        info!("User {} unliked vacation {}", user_id, vacation_id);
        Ok(())
    }

    /// All vacations liked by a user, enriched with country name
    pub async fn get_user_likes(&self, user_id: i32) -> BookingResult<Vec<Vacation>> {
        if self.storage.get_user_by_id(user_id).await?.is_none() {
            return Err(BookingError::NotFound("User"));
        }
        Ok(self.storage.get_user_likes(user_id).await?)
    }

    /// Whether a like exists for a (user, vacation) pair
    pub async fn exists(&self, user_id: i32, vacation_id: i32) -> BookingResult<bool> {
        Ok(self.storage.like_exists(user_id, vacation_id).await?)
    }
}
