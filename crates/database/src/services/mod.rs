mod cascade;
pub mod category;
pub mod course;
pub mod group_major;
pub mod major;

pub use cascade::CascadeSummary;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::entities::{category, course, group_major, major};
    use sea_orm::{DatabaseConnection, MockExecResult};

    pub fn major_row(major_id: i32, major_code: &str) -> major::Model {
        major::Model {
            major_id,
            major_code: major_code.to_string(),
            major_name_th: "วิทยาการคอมพิวเตอร์".to_string(),
            major_name_eng: "Computer Science".to_string(),
            major_year: 2567,
            major_unit: 128,
            status: Some("active".to_string()),
        }
    }

    pub fn category_row(category_id: i32, major_id: i32) -> category::Model {
        category::Model {
            category_id,
            category_name: "General Education".to_string(),
            category_unit: 30,
            major_id,
        }
    }

    pub fn group_row(group_id: i32, category_id: i32) -> group_major::Model {
        group_major::Model {
            group_id,
            group_name: "Core Courses".to_string(),
            group_unit: 12,
            category_id,
        }
    }

    pub fn course_row(
        course_id: &str,
        category_id: Option<i32>,
        group_id: Option<i32>,
    ) -> course::Model {
        course::Model {
            course_id: course_id.to_string(),
            course_name_th: "การเขียนโปรแกรมเบื้องต้น".to_string(),
            course_name_eng: "Introduction to Programming".to_string(),
            course_unit: 3,
            course_theory: 2,
            course_practice: 1,
            category_research: None,
            category_id,
            group_id,
            freesubject: false,
        }
    }

    pub fn affected(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    /// Every statement the mock saw, in order, including BEGIN/COMMIT/ROLLBACK
    pub fn executed_sql(db: DatabaseConnection) -> Vec<String> {
        db.into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements())
            .map(|stmt| stmt.sql.clone())
            .collect()
    }

    /// Asserts `sql` reads from `table`
    pub fn assert_select(sql: &str, table: &str) {
        assert!(
            sql.starts_with("SELECT") && sql.contains(&format!("FROM \"{table}\"")),
            "expected a select from {table}, got {sql}"
        );
    }
}
