use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Student::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Student::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key()
                    )
                    .col(ColumnDef::new(Student::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course")
                            .from(Student::Table, Student::CourseId)
                            .to(Course::Table, Course::Id)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_course")
                    .table(Student::Table)
                    .col(Student::CourseId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    Name,
    Email,
    CourseId,
}
