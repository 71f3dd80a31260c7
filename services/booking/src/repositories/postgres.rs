//! PostgreSQL implementation of the storage contract
//!
//! Vacation reads join the countries table for the country name and count
//! likes rows for the derived `total_likes`; the count is never stored.

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::models::{Country, User, UserRecord, Vacation, VacationRecord};
use crate::storage::Storage;

const VACATION_COLUMNS: &str = r#"
    v.vacation_id, v.vacation_title, v.country, v.start_date, v.end_date,
    v.price, v.img_url, c.country_name, COUNT(l.user_id) AS total_likes
"#;

/// Storage collaborator backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Create a new PostgreSQL storage collaborator
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_user(row: &PgRow) -> User {
        User {
            user_id: row.get("user_id"),
            firstname: row.get("firstname"),
            lastname: row.get("lastname"),
            email: row.get("email"),
            password_hash: row.get("password"),
            date_of_birth: row.get("date_of_birth"),
            role: row.get("role"),
        }
    }

    fn map_vacation(row: &PgRow) -> Vacation {
        Vacation {
            vacation_id: row.get("vacation_id"),
            vacation_title: row.get("vacation_title"),
            country: row.get("country"),
            start_date: row.get("start_date"),
            end_date: row.get("end_date"),
            price: row.get("price"),
            img_url: row.get("img_url"),
            country_name: row.get("country_name"),
            total_likes: row.get("total_likes"),
        }
    }
}

impl Storage for PgStorage {
    async fn create_user(&self, user: &UserRecord) -> DatabaseResult<i32> {
        info!("Creating new user: {}", user.email);

        let row = sqlx::query(
            r#"
            INSERT INTO users (firstname, lastname, email, password, date_of_birth, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING user_id
            "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.date_of_birth)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.get("user_id"))
    }

    async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, firstname, lastname, email, password, date_of_birth, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.as_ref().map(Self::map_user))
    }

    async fn get_user_by_id(&self, user_id: i32) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, firstname, lastname, email, password, date_of_birth, role
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.as_ref().map(Self::map_user))
    }

    async fn create_vacation(&self, vacation: &VacationRecord) -> DatabaseResult<i32> {
        info!("Creating new vacation: {}", vacation.vacation_title);

        let row = sqlx::query(
            r#"
            INSERT INTO vacations (vacation_title, country, start_date, end_date, price, img_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING vacation_id
            "#,
        )
        .bind(&vacation.vacation_title)
        .bind(vacation.country)
        .bind(vacation.start_date)
        .bind(vacation.end_date)
        .bind(vacation.price)
        .bind(&vacation.img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.get("vacation_id"))
    }

    async fn get_vacation_by_id(&self, vacation_id: i32) -> DatabaseResult<Option<Vacation>> {
        let query = format!(
            r#"
            SELECT {VACATION_COLUMNS}
            FROM vacations v
            JOIN countries c ON v.country = c.country_id
            LEFT JOIN likes l ON v.vacation_id = l.vacation_id
            WHERE v.vacation_id = $1
            GROUP BY v.vacation_id, c.country_name
            "#
        );
        let row = sqlx::query(&query)
            .bind(vacation_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(row.as_ref().map(Self::map_vacation))
    }

    async fn get_all_vacations(&self) -> DatabaseResult<Vec<Vacation>> {
        let query = format!(
            r#"
            SELECT {VACATION_COLUMNS}
            FROM vacations v
            JOIN countries c ON v.country = c.country_id
            LEFT JOIN likes l ON v.vacation_id = l.vacation_id
            GROUP BY v.vacation_id, c.country_name
            ORDER BY v.vacation_id
            "#
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(rows.iter().map(Self::map_vacation).collect())
    }

    async fn update_vacation(
        &self,
        vacation_id: i32,
        vacation: &VacationRecord,
    ) -> DatabaseResult<()> {
        info!("Updating vacation {}", vacation_id);

        sqlx::query(
            r#"
            UPDATE vacations
            SET vacation_title = $1, country = $2, start_date = $3, end_date = $4,
                price = $5, img_url = $6
            WHERE vacation_id = $7
            "#,
        )
        .bind(&vacation.vacation_title)
        .bind(vacation.country)
        .bind(vacation.start_date)
        .bind(vacation.end_date)
        .bind(vacation.price)
        .bind(&vacation.img_url)
        .bind(vacation_id)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(())
    }

    async fn delete_vacation(&self, vacation_id: i32) -> DatabaseResult<()> {
        info!("Deleting vacation {}", vacation_id);

        sqlx::query("DELETE FROM vacations WHERE vacation_id = $1")
            .bind(vacation_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(())
    }

    async fn add_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()> {
        sqlx::query("INSERT INTO likes (user_id, vacation_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(vacation_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(())
    }

    async fn remove_like(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM likes WHERE user_id = $1 AND vacation_id = $2")
            .bind(user_id)
            .bind(vacation_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(())
    }

    async fn like_exists(&self, user_id: i32, vacation_id: i32) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND vacation_id = $2)",
        )
        .bind(user_id)
        .bind(vacation_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(exists)
    }

    async fn get_user_likes(&self, user_id: i32) -> DatabaseResult<Vec<Vacation>> {
        let query = format!(
            r#"
            SELECT {VACATION_COLUMNS}
            FROM likes ul
            JOIN vacations v ON v.vacation_id = ul.vacation_id
            JOIN countries c ON v.country = c.country_id
            LEFT JOIN likes l ON v.vacation_id = l.vacation_id
            WHERE ul.user_id = $1
            GROUP BY v.vacation_id, c.country_name
            ORDER BY v.vacation_id
            "#
        );
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(rows.iter().map(Self::map_vacation).collect())
    }

    async fn get_all_countries(&self) -> DatabaseResult<Vec<Country>> {
        let rows =
            sqlx::query("SELECT country_id, country_name FROM countries ORDER BY country_name")
                .fetch_all(&self.pool)
                .await
                .map_err(DatabaseError::Query)?;

        Ok(rows
            .iter()
            .map(|row| Country {
                country_id: row.get("country_id"),
                country_name: row.get("country_name"),
            })
            .collect())
    }

    async fn get_country_by_id(&self, country_id: i32) -> DatabaseResult<Option<Country>> {
        let row = sqlx::query("SELECT country_id, country_name FROM countries WHERE country_id = $1")
            .bind(country_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(row.map(|row| Country {
            country_id: row.get("country_id"),
            country_name: row.get("country_name"),
        }))
    }
}
