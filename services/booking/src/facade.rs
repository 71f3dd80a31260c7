//! Access gate facade
//!
//! Composes the credential, vacation, and like rule sets behind a single
//! entry point and enforces authentication and authorization per operation.
//! The session is an explicit value owned by the caller: login fills it,
//! logout clears it, and every gated operation reads it. Like operations
//! scope to the session identity, never to a caller-supplied user id.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{BookingError, BookingResult};
use crate::likes::LikeService;
use crate::models::{Country, NewUser, NewVacation, Role, Session, User, UserRecord, Vacation};
use crate::password;
use crate::storage::Storage;
use crate::vacations::VacationService;
use crate::validation;

/// Facade over the booking core for the presentation layer
pub struct BookingFacade<S> {
    storage: Arc<S>,
    vacations: VacationService<S>,
    likes: LikeService<S>,
}

impl<S: Storage> BookingFacade<S> {
    /// Create a new facade over the given storage collaborator
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            vacations: VacationService::new(Arc::clone(&storage)),
            likes: LikeService::new(Arc::clone(&storage)),
            storage,
        }
    }

    fn require_authentication<'a>(&self, session: &'a Session) -> BookingResult<&'a User> {
        session.identity().ok_or(BookingError::Unauthenticated)
    }

    fn require_admin<'a>(&self, session: &'a Session) -> BookingResult<&'a User> {
        let user = self.require_authentication(session)?;
        if !user.role.is_admin() {
            return Err(BookingError::Unauthorized(
                "Unauthorized: Admin access required",
            ));
        }
        Ok(user)
    }

    /// Register a new user
    ///
    /// Validates the full payload, hashes the password, and persists the
    /// user with the regular role. Does not change any session state.
    pub async fn register(&self, user_data: &NewUser) -> BookingResult<i32> {
        let date_of_birth = validation::validate_user_data(user_data)?;
        let password_hash = password::hash(&user_data.password)?;

        let record = UserRecord {
            firstname: user_data.firstname.clone(),
            lastname: user_data.lastname.clone(),
            email: user_data.email.clone(),
            password_hash,
            date_of_birth,
            role: Role::Regular,
        };
        let user_id = self.storage.create_user(&record).await?;
        info!("Registered user {} ({})", user_id, record.email);
        Ok(user_id)
    }

    /// Authenticate and transition the session to Authenticated
    ///
    /// An unknown email and a wrong password both fail with the same
    /// credentials error; the cause is never revealed.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        plaintext_password: &str,
    ) -> BookingResult<User> {
        let Some(user) = self.storage.get_user_by_email(email).await? else {
            return Err(BookingError::InvalidCredentials);
        };
        if !password::verify(plaintext_password, &user.password_hash)? {
            return Err(BookingError::InvalidCredentials);
        }

        info!("User {} logged in", user.user_id);
        session.authenticate(user.clone());
        Ok(user)
    }

    /// Transition the session to Anonymous; a no-op when already anonymous
    pub fn logout(&self, session: &mut Session) {
        if let Some(user) = session.identity() {
            info!("User {} logged out", user.user_id);
        }
        session.clear();
    }

    /// Create a vacation (admin only)
    pub async fn create_vacation(
        &self,
        session: &Session,
        data: &NewVacation,
    ) -> BookingResult<i32> {
        self.require_admin(session)?;
        self.vacations.create(data).await
    }

    /// Replace an existing vacation (admin only)
    pub async fn update_vacation(
        &self,
        session: &Session,
        vacation_id: i32,
        data: &NewVacation,
    ) -> BookingResult<()> {
        self.require_admin(session)?;
        self.vacations.update(vacation_id, data).await
    }

    /// Delete an existing vacation (admin only)
    pub async fn delete_vacation(&self, session: &Session, vacation_id: i32) -> BookingResult<()> {
        self.require_admin(session)?;
        self.vacations.delete(vacation_id).await
    }

    /// All vacations (authenticated users)
    pub async fn get_all_vacations(&self, session: &Session) -> BookingResult<Vec<Vacation>> {
        self.require_authentication(session)?;
        self.vacations.get_all().await
    }

    /// A single vacation by id (authenticated users)
    pub async fn get_vacation_by_id(
        &self,
        session: &Session,
        vacation_id: i32,
    ) -> BookingResult<Option<Vacation>> {
        self.require_authentication(session)?;
        self.vacations.get_by_id(vacation_id).await
    }

    /// Like a vacation on behalf of the session identity
    pub async fn like_vacation(&self, session: &Session, vacation_id: i32) -> BookingResult<()> {
        let user = self.require_authentication(session)?;
        self.likes.add(user.user_id, vacation_id).await
    }

    /// Remove the session identity's like from a vacation
    pub async fn unlike_vacation(&self, session: &Session, vacation_id: i32) -> BookingResult<()> {
        let user = self.require_authentication(session)?;
        self.likes.remove(user.user_id, vacation_id).await
    }

    /// All vacations liked by the session identity
    pub async fn get_user_likes(&self, session: &Session) -> BookingResult<Vec<Vacation>> {
        let user = self.require_authentication(session)?;
        self.likes.get_user_likes(user.user_id).await
    }

    /// All countries; public, no authentication required
    pub async fn get_all_countries(&self) -> BookingResult<Vec<Country>> {
        Ok(self.storage.get_all_countries().await?)
    }

    // Validator pass-throughs for field-level feedback in the presentation
    // layer.

    pub fn validate_email(&self, email: &str) -> BookingResult<()> {
        validation::validate_email(email)
    }

    pub fn validate_password(&self, plaintext_password: &str) -> BookingResult<()> {
        validation::validate_password(plaintext_password)
    }

    pub fn validate_date_of_birth(&self, date_of_birth: &str) -> BookingResult<NaiveDate> {
        validation::validate_date_of_birth(date_of_birth)
    }

    pub fn validate_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> BookingResult<(NaiveDate, NaiveDate)> {
        validation::validate_dates(start_date, end_date)
    }

    pub fn validate_price(&self, price: &str) -> BookingResult<f64> {
        validation::validate_price(price)
    }
}
