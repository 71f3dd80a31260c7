//! Vacation service: business rules and CRUD orchestration
//!
//! Validates incoming vacation payloads (required fields, date range, price
//! bounds, country referential check) before any write reaches storage.

use std::sync::Arc;

use tracing::info;

use crate::error::{BookingError, BookingResult};
use crate::models::{NewVacation, Vacation, VacationRecord};
use crate::storage::Storage;
use crate::validation::{validate_dates, validate_price};

/// Vacation business-rule layer over the storage collaborator
pub struct VacationService<S> {
    storage: Arc<S>,
}

impl<S: Storage> VacationService<S> {
    /// Create a new vacation service
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Validate a vacation payload into a typed record
    ///
    /// Required fields are checked in order (vacation_title, country,
    /// start_date, end_date, price), then the date range, then the price,
    /// then the country reference is resolved against storage.
    pub async fn validate(&self, data: &NewVacation) -> BookingResult<VacationRecord> {
        let required: [(&'static str, &str); 5] = [
            ("vacation_title", &data.vacation_title),
            ("country", &data.country),
            ("start_date", &data.start_date),
            ("end_date", &data.end_date),
            ("price", &data.price),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(BookingError::MissingField(name));
            }
        }

        let (start_date, end_date) = validate_dates(&data.start_date, &data.end_date)?;
        let price = validate_price(&data.price)?;

        let country_id: i32 = data
            .country
            .trim()
            .parse()
            .map_err(|_| BookingError::InvalidCountry)?;
        if self.storage.get_country_by_id(country_id).await?.is_none() {
            return Err(BookingError::InvalidCountry);
        }

        Ok(VacationRecord {
            vacation_title: data.vacation_title.clone(),
            country: country_id,
            start_date,
            end_date,
            price,
            img_url: data.img_url.clone(),
        })
    }

    /// Validate and persist a new vacation; returns the assigned id
    pub async fn create(&self, data: &NewVacation) -> BookingResult<i32> {
        let record = self.validate(data).await?;
        let vacation_id = self.storage.create_vacation(&record).await?;
        info!("Created vacation {}: {}", vacation_id, record.vacation_title);
        Ok(vacation_id)
    }

    /// Validate and persist a replacement for an existing vacation
    ///
    /// The payload is validated with the same rules as creation, including
    /// the strictly-future start date, before the target's existence is
    /// required.
    pub async fn update(&self, vacation_id: i32, data: &NewVacation) -> BookingResult<()> {
        let record = self.validate(data).await?;
        if self
            .storage
            .get_vacation_by_id(vacation_id)
            .await?
            .is_none()
        {
            return Err(BookingError::NotFound("Vacation"));
        }
        self.storage.update_vacation(vacation_id, &record).await?;
        info!("Updated vacation {}", vacation_id);
        Ok(())
    }

    /// Delete an existing vacation
    pub async fn delete(&self, vacation_id: i32) -> BookingResult<()> {
        if self
            .storage
            .get_vacation_by_id(vacation_id)
            .await?
            .is_none()
        {
            return Err(BookingError::NotFound("Vacation"));
        }
        self.storage.delete_vacation(vacation_id).await?;
        info!("Deleted vacation {}", vacation_id);
        Ok(())
    }

    /// All vacations, enriched with country name and like count
    pub async fn get_all(&self) -> BookingResult<Vec<Vacation>> {
        Ok(self.storage.get_all_vacations().await?)
    }

    /// A single vacation by id, enriched with country name and like count
    pub async fn get_by_id(&self, vacation_id: i32) -> BookingResult<Option<Vacation>> {
        Ok(self.storage.get_vacation_by_id(vacation_id).await?)
    }
}
