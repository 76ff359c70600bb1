/**
 * Submission Database Operations
 *
 * A submission is the set of values a user entered against one template:
 * a map from field descriptor id to the entered value, stored as JSONB.
 * Submissions are insert-only; there is no update or delete operation.
 */
use std::collections::HashMap;

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

/// Entered values keyed by field descriptor id. Values keep their JSON
/// shape: strings for text/date, booleans for checkboxes, an opaque image
/// encoding for signatures.
pub type SubmissionValues = HashMap<String, serde_json::Value>;

/// Store one submission
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `form_name` - Template the values were entered against
/// * `values` - Field id to entered value
pub async fn insert_submission(
    pool: &PgPool,
    form_name: &str,
    values: &SubmissionValues,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO submissions (id, form_name, answers, submitted_at)
        VALUES (gen_random_uuid(), $1, $2, $3)
        "#,
    )
    .bind(form_name)
    .bind(Json(values))
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
