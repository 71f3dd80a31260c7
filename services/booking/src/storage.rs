//! Storage collaborator contract
//!
//! The booking core talks to persistence exclusively through this trait,
//! injected into each service rather than reached through a global. The
//! production implementation lives in [`crate::repositories`]; tests use the
//! in-memory double below. "Not found" lookups degrade to `Ok(None)`; real
//! storage faults surface as `DatabaseError`.

use common::error::DatabaseResult;

use crate::models::{Country, User, UserRecord, Vacation, VacationRecord};

/// CRUD contract for users, vacations, likes, and countries
#[allow(async_fn_in_trait)]
pub trait Storage {
    // Users
    async fn create_user(&self, user: &UserRecord) -> DatabaseResult<i32>;
    async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;
    async fn get_user_by_id(&self, user_id: i32) -> DatabaseResult<Option<User>>;

    // Vacations; reads are enriched with country name and like count
    async fn create_vacation(&self, vacation: &VacationRecord) -> DatabaseResult<i32>;
    async fn get_vacation_by_id(&self, vacation_id: i32) -> DatabaseResult<Option<Vacation>>;
    async fn get_all_vacations(&self) -> DatabaseResult<Vec<Vacation>>;
    async fn update_vacation(
        &self,
        vacation_id: i32,
        vacation: &VacationRecord,
    ) -> DatabaseResult<()>;
    async fn delete_vacation(&self, vacation_id: i32) -> DatabaseResult<()>;

    // Likes
    async fn add_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()>;
    async fn remove_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()>;
    async fn like_exists(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<bool>;
    async fn get_user_likes(&self, user_id: i32) -> DatabaseResult<Vec<Vacation>>;

    // Countries (read-only reference data)
    async fn get_all_countries(&self) -> DatabaseResult<Vec<Country>>;
    async fn get_country_by_id(&self, country_id: i32) -> DatabaseResult<Option<Country>>;
}

#[cfg(test)]
pub mod memory {
    //! In-memory storage double for service and facade tests

    use std::collections::HashSet;
    use std::sync::Mutex;

    use common::error::DatabaseResult;

    use super::Storage;
    use crate::models::{Country, Role, User, UserRecord, Vacation, VacationRecord};

    #[derive(Default)]
    struct State {
        users: Vec<User>,
        vacations: Vec<(i32, VacationRecord)>,
        likes: HashSet<(i32, i32)>,
        countries: Vec<Country>,
        next_user_id: i32,
        next_vacation_id: i32,
    }

    /// In-memory implementation of the storage contract
    #[derive(Default)]
    pub struct MemoryStorage {
        state: Mutex<State>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a store pre-populated with countries
        pub fn with_countries(countries: Vec<(i32, &str)>) -> Self {
            let storage = Self::new();
            {
                let mut state = storage.state.lock().unwrap();
                state.countries = countries
                    .into_iter()
                    .map(|(country_id, country_name)| Country {
                        country_id,
                        country_name: country_name.to_string(),
                    })
                    .collect();
            }
            storage
        }

        /// Insert a user directly, bypassing validation; returns its id
        pub fn seed_user(&self, email: &str, password_hash: &str, role: Role) -> i32 {
            let mut state = self.state.lock().unwrap();
            state.next_user_id += 1;
            let user_id = state.next_user_id;
            state.users.push(User {
                user_id,
                firstname: "Seed".to_string(),
                lastname: "User".to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                role,
            });
            user_id
        }

        pub fn vacation_count(&self) -> usize {
            self.state.lock().unwrap().vacations.len()
        }

        fn enrich(state: &State, vacation_id: i32, record: &VacationRecord) -> Vacation {
            let country_name = state
                .countries
                .iter()
                .find(|c| c.country_id == record.country)
                .map(|c| c.country_name.clone())
                .unwrap_or_default();
            let total_likes = state
                .likes
                .iter()
                .filter(|(_, liked)| *liked == vacation_id)
                .count() as i64;
            Vacation {
                vacation_id,
                vacation_title: record.vacation_title.clone(),
                country: record.country,
                start_date: record.start_date,
                end_date: record.end_date,
                price: record.price,
                img_url: record.img_url.clone(),
                country_name,
                total_likes,
            }
        }
    }

    impl Storage for MemoryStorage {
        async fn create_user(&self, user: &UserRecord) -> DatabaseResult<i32> {
            let mut state = self.state.lock().unwrap();
            state.next_user_id += 1;
            let user_id = state.next_user_id;
            state.users.push(User {
                user_id,
                firstname: user.firstname.clone(),
                lastname: user.lastname.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                date_of_birth: user.date_of_birth,
                role: user.role,
            });
            Ok(user_id)
        }

        async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
            let state = self.state.lock().unwrap();
            Ok(state.users.iter().find(|u| u.email == email).cloned())
        }

        async fn get_user_by_id(&self, user_id: i32) -> DatabaseResult<Option<User>> {
            let state = self.state.lock().unwrap();
            Ok(state.users.iter().find(|u| u.user_id == user_id).cloned())
        }

        async fn create_vacation(&self, vacation: &VacationRecord) -> DatabaseResult<i32> {
            let mut state = self.state.lock().unwrap();
            state.next_vacation_id += 1;
            let vacation_id = state.next_vacation_id;
            state.vacations.push((vacation_id, vacation.clone()));
            Ok(vacation_id)
        }

        async fn get_vacation_by_id(&self, vacation_id: i32) -> DatabaseResult<Option<Vacation>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .vacations
                .iter()
                .find(|(id, _)| *id == vacation_id)
                .map(|(id, record)| Self::enrich(&state, *id, record)))
        }

        async fn get_all_vacations(&self) -> DatabaseResult<Vec<Vacation>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .vacations
                .iter()
                .map(|(id, record)| Self::enrich(&state, *id, record))
                .collect())
        }

        async fn update_vacation(
            &self,
            vacation_id: i32,
            vacation: &VacationRecord,
        ) -> DatabaseResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(entry) = state.vacations.iter_mut().find(|(id, _)| *id == vacation_id) {
                entry.1 = vacation.clone();
            }
            Ok(())
        }

        async fn delete_vacation(&self, vacation_id: i32) -> DatabaseResult<()> {
            let mut state = self.state.lock().unwrap();
            state.vacations.retain(|(id, _)| *id != vacation_id);
            Ok(())
        }

        async fn add_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()> {
            let mut state = self.state.lock().unwrap();
            state.likes.insert((user_id, vacation_id));
            Ok(())
        }

        async fn remove_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()> {
            let mut state = self.state.lock().unwrap();
            state.likes.remove(&(user_id, vacation_id));
            Ok(())
        }

        async fn like_exists(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<bool> {
            let state = self.state.lock().unwrap();
            Ok(state.likes.contains(&(user_id, vacation_id)))
        }

        async fn get_user_likes(&self, user_id: i32) -> DatabaseResult<Vec<Vacation>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .vacations
                .iter()
                .filter(|(id, _)| state.likes.contains(&(user_id, *id)))
                .map(|(id, record)| Self::enrich(&state, *id, record))
                .collect())
        }

        async fn get_all_countries(&self) -> DatabaseResult<Vec<Country>> {
            let state = self.state.lock().unwrap();
            Ok(state.countries.clone())
        }

        async fn get_country_by_id(&self, country_id: i32) -> DatabaseResult<Option<Country>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .countries
                .iter()
                .find(|c| c.country_id == country_id)
                .cloned())
        }
    }
}
