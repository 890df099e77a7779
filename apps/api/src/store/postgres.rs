use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{
    Candidate, CandidatePatch, Education, NewCandidate, PreviousExperience, Review, SwipeCounter,
};
use crate::models::hr::{HrAccount, NewHrAccount};
use crate::store::{candidate_not_found, CandidateStore, HrStore};

#[derive(Debug, FromRow)]
struct CandidateRow {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    field: String,
    skills: Vec<String>,
    experience: f64,
    right_swipes: i64,
    left_swipes: i64,
    reviews: Json<Vec<Review>>,
    level: i32,
    education: Json<Vec<Education>>,
    previous_experience: Json<Vec<PreviousExperience>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = AppError;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt =
            |column: &str| AppError::Internal(anyhow!("candidate {id} has a negative {column}"));
        let right_swipes = u64::try_from(row.right_swipes).map_err(|_| corrupt("right_swipes"))?;
        let left_swipes = u64::try_from(row.left_swipes).map_err(|_| corrupt("left_swipes"))?;
        let level = u32::try_from(row.level).map_err(|_| corrupt("level"))?;

        Ok(Candidate {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            field: row.field,
            skills: row.skills,
            experience: row.experience,
            right_swipes,
            left_swipes,
            reviews: row.reviews.0,
            level,
            education: row.education.0,
            previous_experience: row.previous_experience.0,
            created_at: row.created_at,
        })
    }
}

fn level_column(level: u32) -> Result<i32, AppError> {
    i32::try_from(level).map_err(|_| AppError::Validation(format!("level {level} is out of range")))
}

/// `CandidateStore` backed by the `candidates` table.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by_id(&self, sql: &str, id: Uuid) -> Result<Candidate, AppError> {
        sqlx::query_as::<_, CandidateRow>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| candidate_not_found(id))?
            .try_into()
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate, AppError> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            INSERT INTO candidates
                (id, name, email, phone, field, skills, experience, level,
                 education, previous_experience)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.field)
        .bind(&candidate.skills)
        .bind(candidate.experience)
        .bind(level_column(candidate.level)?)
        .bind(Json(&candidate.education))
        .bind(Json(&candidate.previous_experience))
        .fetch_one(&self.pool)
        .await?;

        info!("Created candidate {id}");
        row.try_into()
    }

    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Candidate::try_from)
            .collect()
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Candidate>, AppError> {
        sqlx::query_as::<_, CandidateRow>(
            "SELECT * FROM candidates WHERE lower(email) = lower($1) ORDER BY created_at, id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Candidate::try_from)
        .collect()
    }

    async fn get(&self, id: Uuid) -> Result<Candidate, AppError> {
        self.fetch_one_by_id("SELECT * FROM candidates WHERE id = $1", id)
            .await
    }

    async fn update(&self, id: Uuid, patch: CandidatePatch) -> Result<Candidate, AppError> {
        let level = patch.level.map(level_column).transpose()?;

        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            UPDATE candidates SET
                name                = COALESCE($2, name),
                email               = COALESCE($3, email),
                phone               = COALESCE($4, phone),
                field               = COALESCE($5, field),
                skills              = COALESCE($6, skills),
                experience          = COALESCE($7, experience),
                level               = COALESCE($8, level),
                education           = COALESCE($9, education),
                previous_experience = COALESCE($10, previous_experience)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.phone)
        .bind(patch.field)
        .bind(patch.skills)
        .bind(patch.experience)
        .bind(level)
        .bind(patch.education.map(Json))
        .bind(patch.previous_experience.map(Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| candidate_not_found(id))?;

        info!("Updated candidate {id}");
        row.try_into()
    }

    async fn increment_swipe(
        &self,
        id: Uuid,
        counter: SwipeCounter,
    ) -> Result<Candidate, AppError> {
        // Single-statement increment: concurrent swipes never lose an update.
        let sql = match counter {
            SwipeCounter::Right => {
                "UPDATE candidates SET right_swipes = right_swipes + 1 WHERE id = $1 RETURNING *"
            }
            SwipeCounter::Left => {
                "UPDATE candidates SET left_swipes = left_swipes + 1 WHERE id = $1 RETURNING *"
            }
        };
        self.fetch_one_by_id(sql, id).await
    }

    async fn append_review(&self, id: Uuid, review: Review) -> Result<Candidate, AppError> {
        sqlx::query_as::<_, CandidateRow>(
            "UPDATE candidates SET reviews = reviews || $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(vec![review]))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| candidate_not_found(id))?
        .try_into()
    }
}

#[derive(Debug, FromRow)]
struct HrAccountRow {
    id: Uuid,
    name: String,
    email: String,
    company_name: String,
    points: i64,
    access_level: i32,
    subscribed: bool,
    created_at: DateTime<Utc>,
}

impl From<HrAccountRow> for HrAccount {
    fn from(row: HrAccountRow) -> Self {
        HrAccount {
            id: row.id,
            name: row.name,
            email: row.email,
            company_name: row.company_name,
            points: row.points,
            access_level: row.access_level,
            subscribed: row.subscribed,
            created_at: row.created_at,
        }
    }
}

/// `HrStore` backed by the `hr_accounts` table.
#[derive(Clone)]
pub struct PgHrStore {
    pool: PgPool,
}

impl PgHrStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HrStore for PgHrStore {
    async fn create(&self, account: NewHrAccount) -> Result<HrAccount, AppError> {
        let id = Uuid::new_v4();
        let result = sqlx::query_as::<_, HrAccountRow>(
            r#"
            INSERT INTO hr_accounts (id, name, email, company_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.company_name)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => {
                info!("Created HR account {id}");
                Ok(row.into())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                AppError::Conflict(format!("An HR account for {} already exists", account.email)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<HrAccount>, AppError> {
        Ok(sqlx::query_as::<_, HrAccountRow>(
            "SELECT * FROM hr_accounts WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .map(HrAccount::from))
    }
}
