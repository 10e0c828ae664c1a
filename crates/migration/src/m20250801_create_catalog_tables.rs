use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create major table
        manager
            .create_table(
                Table::create()
                    .table(Major::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Major::MajorId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Major::MajorCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Major::MajorNameTh).string().not_null())
                    .col(ColumnDef::new(Major::MajorNameEng).string().not_null())
                    .col(ColumnDef::new(Major::MajorYear).integer().not_null())
                    .col(ColumnDef::new(Major::MajorUnit).integer().not_null())
                    .col(ColumnDef::new(Major::Status).string())
                    .to_owned(),
            )
            .await?;

        // Create category table
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Category::CategoryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::CategoryName).string().not_null())
                    .col(ColumnDef::new(Category::CategoryUnit).integer().not_null())
                    .col(ColumnDef::new(Category::MajorId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-category-major_id")
                            .from(Category::Table, Category::MajorId)
                            .to(Major::Table, Major::MajorId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create group_major table
        manager
            .create_table(
                Table::create()
                    .table(GroupMajor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupMajor::GroupId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GroupMajor::GroupName).string().not_null())
                    .col(ColumnDef::new(GroupMajor::GroupUnit).integer().not_null())
                    .col(ColumnDef::new(GroupMajor::CategoryId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-group_major-category_id")
                            .from(GroupMajor::Table, GroupMajor::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course table; course codes are supplied by the client
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::CourseId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::CourseNameTh).string().not_null())
                    .col(ColumnDef::new(Course::CourseNameEng).string().not_null())
                    .col(ColumnDef::new(Course::CourseUnit).integer().not_null())
                    .col(ColumnDef::new(Course::CourseTheory).integer().not_null())
                    .col(ColumnDef::new(Course::CoursePractice).integer().not_null())
                    .col(ColumnDef::new(Course::CategoryResearch).string())
                    .col(ColumnDef::new(Course::CategoryId).integer())
                    .col(ColumnDef::new(Course::GroupId).integer())
                    .col(
                        ColumnDef::new(Course::Freesubject)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course-category_id")
                            .from(Course::Table, Course::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course-group_id")
                            .from(Course::Table, Course::GroupId)
                            .to(GroupMajor::Table, GroupMajor::GroupId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GroupMajor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Major::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Major {
    Table,
    MajorId,
    MajorCode,
    MajorNameTh,
    MajorNameEng,
    MajorYear,
    MajorUnit,
    Status,
}

#[derive(Iden)]
enum Category {
    Table,
    CategoryId,
    CategoryName,
    CategoryUnit,
    MajorId,
}

#[derive(Iden)]
enum GroupMajor {
    Table,
    GroupId,
    GroupName,
    GroupUnit,
    CategoryId,
}

#[derive(Iden)]
enum Course {
    Table,
    CourseId,
    CourseNameTh,
    CourseNameEng,
    CourseUnit,
    CourseTheory,
    CoursePractice,
    CategoryResearch,
    CategoryId,
    GroupId,
    Freesubject,
}
