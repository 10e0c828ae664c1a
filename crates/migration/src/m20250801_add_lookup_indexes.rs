use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Categories are listed and cascaded by major
        manager
            .create_index(
                Index::create()
                    .name("idx_category_major_id")
                    .table(Category::Table)
                    .col(Category::MajorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_major_category_id")
                    .table(GroupMajor::Table)
                    .col(GroupMajor::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Courses are looked up by either parent
        manager
            .create_index(
                Index::create()
                    .name("idx_course_category_id")
                    .table(Course::Table)
                    .col(Course::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_group_id")
                    .table(Course::Table)
                    .col(Course::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_course_group_id",
            "idx_course_category_id",
            "idx_group_major_category_id",
            "idx_category_major_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Category {
    Table,
    MajorId,
}

#[derive(Iden)]
enum GroupMajor {
    Table,
    CategoryId,
}

#[derive(Iden)]
enum Course {
    Table,
    CategoryId,
    GroupId,
}
