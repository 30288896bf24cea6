use crate::models::{Day, Exercise, ExercisePatch, NewExercise};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use std::path::Path;
use thiserror::Error;
use tracing::info;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS days (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    position INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    day_id INTEGER NOT NULL REFERENCES days (id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    sets INTEGER NOT NULL CHECK (sets BETWEEN 1 AND 10),
    reps INTEGER NOT NULL CHECK (reps BETWEEN 1 AND 20),
    weight_lbs INTEGER NOT NULL DEFAULT 0 CHECK (weight_lbs >= 0),
    rest_seconds INTEGER NOT NULL DEFAULT 0 CHECK (rest_seconds >= 0),
    position INTEGER NOT NULL DEFAULT 0 CHECK (position >= 0)
);

CREATE INDEX IF NOT EXISTS exercises_day_order ON exercises (day_id, position, id);
"#;

const EXERCISE_COLUMNS: &str = "id, day_id, name, sets, reps, weight_lbs, rest_seconds, position";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("day_id {0} does not exist")]
    UnknownDay(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(path: &Path, max_connections: u32) -> Result<Self, StoreError> {
        info!(
            "opening database {} (max_connections={max_connections})",
            path.display()
        );
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Single-connection in-memory database; the connection is pinned so the data survives.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn seed_days(&self, names: &[String]) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM days")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 || names.is_empty() {
            return Ok(0);
        }

        for (index, name) in names.iter().enumerate() {
            sqlx::query("INSERT INTO days (name, position) VALUES (?, ?)")
                .bind(name)
                .bind(index as i64 + 1)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!("seeded {} days", names.len());
        Ok(names.len())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn list_days(&self) -> Result<Vec<Day>, StoreError> {
        let days = sqlx::query_as::<_, Day>("SELECT id, name, position FROM days ORDER BY position, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(days)
    }

    pub async fn list_exercises(&self, day_id: i64) -> Result<Vec<Exercise>, StoreError> {
        let sql = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE day_id = ? ORDER BY position, id"
        );
        let exercises = sqlx::query_as::<_, Exercise>(&sql)
            .bind(day_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(exercises)
    }

    // Conditional on the day existing, in one statement.
    pub async fn create_exercise(&self, exercise: &NewExercise) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO exercises (day_id, name, sets, reps, weight_lbs, rest_seconds, position)
             SELECT ?, ?, ?, ?, ?, ?, ?
             WHERE EXISTS (SELECT 1 FROM days WHERE id = ?)",
        )
        .bind(exercise.day_id)
        .bind(&exercise.name)
        .bind(exercise.sets)
        .bind(exercise.reps)
        .bind(exercise.weight_lbs)
        .bind(exercise.rest_seconds)
        .bind(exercise.position)
        .bind(exercise.day_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UnknownDay(exercise.day_id));
        }
        Ok(result.last_insert_rowid())
    }

    // One statement, so the write lock is taken up front. Zero rows means no exercise has `id`.
    pub async fn update_exercise(&self, id: i64, patch: &ExercisePatch) -> Result<u64, StoreError> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE exercises SET ");
        let mut columns = query.separated(", ");
        if let Some(name) = &patch.name {
            columns.push("name = ");
            columns.push_bind_unseparated(name.clone());
        }
        for (column, value) in integer_columns(patch) {
            columns.push(format!("{column} = "));
            columns.push_bind_unseparated(value);
        }
        query.push(" WHERE id = ").push_bind(id);
        if let Some(day_id) = patch.day_id {
            query
                .push(" AND EXISTS (SELECT 1 FROM days WHERE id = ")
                .push_bind(day_id)
                .push(")");
        }

        let updated = query.build().execute(&self.pool).await?.rows_affected();
        if updated == 0 {
            if let Some(day_id) = patch.day_id {
                if !self.day_exists(day_id).await? {
                    return Err(StoreError::UnknownDay(day_id));
                }
            }
        }
        Ok(updated)
    }

    async fn day_exists(&self, day_id: i64) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM days WHERE id = ?")
            .bind(day_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn delete_exercise(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn integer_columns(patch: &ExercisePatch) -> Vec<(&'static str, i64)> {
    [
        ("sets", patch.sets),
        ("reps", patch.reps),
        ("weight_lbs", patch.weight_lbs),
        ("rest_seconds", patch.rest_seconds),
        ("position", patch.position),
        ("day_id", patch.day_id),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.map(|value| (column, value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store() -> Store {
        let store = Store::in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        let names = vec!["Push".to_string(), "Pull".to_string()];
        store.seed_days(&names).await.unwrap();
        store
    }

    fn squat(day_id: i64) -> NewExercise {
        NewExercise {
            day_id,
            name: "Squat".into(),
            sets: 5,
            reps: 8,
            weight_lbs: 135,
            rest_seconds: 90,
            position: 0,
        }
    }

    #[tokio::test]
    async fn seeding_only_fills_an_empty_table() {
        let store = seeded_store().await;
        let again = store.seed_days(&["Legs".to_string()]).await.unwrap();
        assert_eq!(again, 0);

        let days = store.list_days().await.unwrap();
        let names: Vec<_> = days.iter().map(|day| day.name.as_str()).collect();
        assert_eq!(names, ["Push", "Pull"]);
        assert_eq!(days[0].position, 1);
    }

    #[tokio::test]
    async fn exercises_are_ordered_by_position_then_id() {
        let store = seeded_store().await;
        let late = store
            .create_exercise(&NewExercise { position: 2, ..squat(1) })
            .await
            .unwrap();
        let first = store.create_exercise(&squat(1)).await.unwrap();
        let second = store.create_exercise(&squat(1)).await.unwrap();

        let ids: Vec<_> = store
            .list_exercises(1)
            .await
            .unwrap()
            .iter()
            .map(|exercise| exercise.id)
            .collect();
        assert_eq!(ids, [first, second, late]);
    }

    #[tokio::test]
    async fn listing_an_empty_day_is_not_an_error() {
        let store = seeded_store().await;
        assert!(store.list_exercises(2).await.unwrap().is_empty());
        assert!(store.list_exercises(404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_day() {
        let store = seeded_store().await;
        let err = store.create_exercise(&squat(99)).await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownDay(99)));
    }

    #[tokio::test]
    async fn patch_changes_only_supplied_columns() {
        let store = seeded_store().await;
        let id = store.create_exercise(&squat(1)).await.unwrap();

        let patch = ExercisePatch {
            reps: Some(5),
            ..ExercisePatch::default()
        };
        assert_eq!(store.update_exercise(id, &patch).await.unwrap(), 1);

        let stored = store.list_exercises(1).await.unwrap().remove(0);
        assert_eq!(
            stored,
            Exercise {
                id,
                day_id: 1,
                name: "Squat".into(),
                sets: 5,
                reps: 5,
                weight_lbs: 135,
                rest_seconds: 90,
                position: 0,
            }
        );
    }

    #[tokio::test]
    async fn patch_can_move_an_exercise_between_days() {
        let store = seeded_store().await;
        let id = store.create_exercise(&squat(1)).await.unwrap();

        let patch = ExercisePatch {
            day_id: Some(2),
            name: Some("Front Squat".into()),
            ..ExercisePatch::default()
        };
        store.update_exercise(id, &patch).await.unwrap();
        assert!(store.list_exercises(1).await.unwrap().is_empty());
        assert_eq!(store.list_exercises(2).await.unwrap()[0].name, "Front Squat");

        let bad = ExercisePatch {
            day_id: Some(77),
            ..ExercisePatch::default()
        };
        let err = store.update_exercise(id, &bad).await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownDay(77)));
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_for_missing_rows() {
        let store = seeded_store().await;
        let id = store.create_exercise(&squat(1)).await.unwrap();
        let patch = ExercisePatch {
            sets: Some(3),
            ..ExercisePatch::default()
        };

        assert_eq!(store.update_exercise(id + 100, &patch).await.unwrap(), 0);
        assert_eq!(store.delete_exercise(id).await.unwrap(), 1);
        assert_eq!(store.delete_exercise(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_day_moves_do_not_fail() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "workout_tracker_store_{}_{}.db",
            std::process::id(),
            nanos
        ));
        let store = Store::connect(&path, 10).await.unwrap();
        store.ensure_schema().await.unwrap();
        store
            .seed_days(&["Push".to_string(), "Pull".to_string()])
            .await
            .unwrap();
        let id = store.create_exercise(&squat(1)).await.unwrap();

        let mut tasks = Vec::new();
        for round in 0..40 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let patch = ExercisePatch {
                    day_id: Some(1 + round % 2),
                    ..ExercisePatch::default()
                };
                store.update_exercise(id, &patch).await
            }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap(), 1);
        }

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let store = Store::in_memory().await.unwrap();
        store.ping().await.unwrap();
    }
}
