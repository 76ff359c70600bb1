/**
 * Form Template Database Operations
 *
 * Templates are stored one row per form: the unique human-key name plus the
 * ordered element list as JSONB. The JSON array order IS the display order;
 * nothing re-sorts it on the way in or out.
 *
 * Two editors saving the same template race with last-write-wins semantics.
 * That is an accepted limitation of the builder, not something this layer
 * tries to fix.
 */
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::shared::forms::{FieldDescriptor, FieldKind, FormTemplate};

#[derive(sqlx::FromRow)]
struct TemplateRow {
    name: String,
    elements: Json<Vec<FieldDescriptor>>,
}

/// Get a template by name
///
/// # Returns
/// The template or None if not found
pub async fn get_template(pool: &PgPool, name: &str) -> Result<Option<FormTemplate>, sqlx::Error> {
    let row = sqlx::query_as::<_, TemplateRow>(
        r#"
        SELECT name, elements
        FROM form_templates
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| FormTemplate {
        name: r.name,
        elements: r.elements.0,
    }))
}

/// List all template names, alphabetically
pub async fn list_template_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name
        FROM form_templates
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}

/// Save the full element sequence for a template (upsert).
///
/// The builder sends the complete current order; the previous order is
/// replaced wholesale (last write wins).
pub async fn save_template(
    pool: &PgPool,
    name: &str,
    elements: &[FieldDescriptor],
) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO form_templates (id, name, elements, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, $3, $3)
        ON CONFLICT (name) DO UPDATE SET
            elements = EXCLUDED.elements,
            updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(name)
    .bind(Json(elements))
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Seed the predefined inspection templates.
///
/// Only inserts templates that do not exist yet, so operator edits survive
/// a restart.
pub async fn seed_default_templates(pool: &PgPool) -> Result<(), sqlx::Error> {
    for template in default_templates() {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO form_templates (id, name, elements, created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, $3, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&template.name)
        .bind(Json(&template.elements))
        .bind(now)
        .execute(pool)
        .await?;
    }

    tracing::info!("Default inspection templates seeded");
    Ok(())
}

/// The inspection forms the application ships with
pub fn default_templates() -> Vec<FormTemplate> {
    vec![
        FormTemplate {
            name: "site-safety".to_string(),
            elements: vec![
                FieldDescriptor::new("inspector-name", FieldKind::Text, "Inspector Name"),
                FieldDescriptor::new("site-address", FieldKind::Text, "Site Address"),
                FieldDescriptor::new("inspected-on", FieldKind::Date, "Inspected On"),
                FieldDescriptor::new("exits-clear", FieldKind::Checkbox, "Emergency exits clear"),
                FieldDescriptor::new("extinguishers", FieldKind::Checkbox, "Extinguishers serviced"),
                FieldDescriptor::new("remarks", FieldKind::Text, "Remarks"),
                FieldDescriptor::new("inspector-signature", FieldKind::Signature, "Inspector Signature"),
            ],
        },
        FormTemplate {
            name: "vehicle-inspection".to_string(),
            elements: vec![
                FieldDescriptor::new("plate-number", FieldKind::Text, "Plate Number"),
                FieldDescriptor::new("inspected-on", FieldKind::Date, "Inspected On"),
                FieldDescriptor::new("brakes-pass", FieldKind::Checkbox, "Brakes pass"),
                FieldDescriptor::new("lights-pass", FieldKind::Checkbox, "Lights pass"),
                FieldDescriptor::new("emissions-pass", FieldKind::Checkbox, "Emissions pass"),
                FieldDescriptor::new("inspector-signature", FieldKind::Signature, "Inspector Signature"),
            ],
        },
        FormTemplate {
            name: "food-premises".to_string(),
            elements: vec![
                FieldDescriptor::new("premises-name", FieldKind::Text, "Premises Name"),
                FieldDescriptor::new("license-number", FieldKind::Text, "License Number"),
                FieldDescriptor::new("inspected-on", FieldKind::Date, "Inspected On"),
                FieldDescriptor::new("cold-chain", FieldKind::Checkbox, "Cold chain maintained"),
                FieldDescriptor::new("surfaces-clean", FieldKind::Checkbox, "Surfaces sanitary"),
                FieldDescriptor::new("inspector-signature", FieldKind::Signature, "Inspector Signature"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_templates_have_unique_names() {
        let templates = default_templates();
        let names: HashSet<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn test_default_template_field_ids_unique_within_template() {
        for template in default_templates() {
            let ids: HashSet<&str> = template.elements.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(
                ids.len(),
                template.elements.len(),
                "duplicate field id in {}",
                template.name
            );
        }
    }

    #[test]
    fn test_every_default_template_ends_with_signature() {
        for template in default_templates() {
            let last = template.elements.last().unwrap();
            assert_eq!(last.kind, FieldKind::Signature, "in {}", template.name);
        }
    }
}
