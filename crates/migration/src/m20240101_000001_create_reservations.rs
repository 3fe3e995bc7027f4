//! Create `reservations` table.
//!
//! One row per parking booking. `id` uses AUTOINCREMENT so identifiers are
//! never reused; `email` carries the only uniqueness constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::Id))
                    .col(text(Reservations::Name))
                    .col(text(Reservations::Email).unique_key())
                    .col(text(Reservations::Phone))
                    .col(text(Reservations::Checkin))
                    .col(text(Reservations::Checkout))
                    .col(text(Reservations::CarModel))
                    .col(text(Reservations::CarSize))
                    .col(text(Reservations::LicensePlate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Checkin,
    Checkout,
    CarModel,
    CarSize,
    LicensePlate,
}
